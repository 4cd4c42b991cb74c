use crate::evaluator::ServiceState;

/// Все способы, которыми проверка завершается раньше вердикта.
/// Каждый вариант сопоставлен состоянию Nagios и тем самым коду выхода.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("ERROR: Only SNMPv2 is supported")]
    UnsupportedVersion,

    #[error("ERROR: critical ({critical}) > warning ({warning})")]
    ThresholdOrder { critical: i64, warning: i64 },

    #[error("ERROR: Occurred during SNMP session setup for {target}: ({cause:#})")]
    Session { target: String, cause: anyhow::Error },

    #[error("ERROR: Occurred during SNMP walk for OID {oid} from {target}: ({cause:#})")]
    Snmp {
        oid: String,
        target: String,
        cause: anyhow::Error,
    },

    #[error("ERROR: Pool {pool} returned unreadable counter: {detail}")]
    BadCounter { pool: String, detail: String },
}

impl CheckError {
    pub fn session(target: &str, cause: anyhow::Error) -> Self {
        CheckError::Session {
            target: target.to_string(),
            cause,
        }
    }

    pub fn snmp(oid: &str, target: &str, cause: anyhow::Error) -> Self {
        CheckError::Snmp {
            oid: oid.to_string(),
            target: target.to_string(),
            cause,
        }
    }

    /// Ошибки конфигурации порогов дают UNKNOWN, всё остальное CRITICAL
    pub fn state(&self) -> ServiceState {
        match self {
            CheckError::ThresholdOrder { .. } => ServiceState::Unknown,
            CheckError::UnsupportedVersion
            | CheckError::Session { .. }
            | CheckError::Snmp { .. }
            | CheckError::BadCounter { .. } => ServiceState::Critical,
        }
    }
}
