//! Liveness probe.

use serde::Serialize;

/// Service identifier reported by the probe.
pub const SERVICE_NAME: &str = "build-agent";

/// Fixed liveness payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub service: &'static str,
}

/// Report liveness. Pure and side-effect free: the payload is the same on
/// every call.
pub fn health_check() -> Health {
    Health {
        status: "ok",
        service: SERVICE_NAME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_check_is_idempotent() {
        let first = health_check();
        for _ in 0..5 {
            assert_eq!(health_check(), first);
        }
    }

    #[test]
    fn health_wire_format() {
        let json = serde_json::to_value(health_check()).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "build-agent");
    }
}
