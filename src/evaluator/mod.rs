use crate::collector::PoolCounters;
use crate::error::CheckError;
use crate::formatter::NagiosFormatter;

/// Состояние сервиса в терминах Nagios
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl ServiceState {
    /// Код выхода процесса, который читает Nagios
    pub fn exit_code(self) -> u8 {
        match self {
            ServiceState::Ok => 0,
            ServiceState::Warning => 1,
            ServiceState::Critical => 2,
            ServiceState::Unknown => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceState::Ok => "OK",
            ServiceState::Warning => "WARNING",
            ServiceState::Critical => "CRITICAL",
            ServiceState::Unknown => "UNKNOWN",
        }
    }
}

/// Вердикт по пулу: состояние плюс готовая строка для Nagios
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub state: ServiceState,
    pub message: String,
}

/// Классификатор собранных показаний пула
pub struct PoolEvaluator;

impl PoolEvaluator {
    /// Выносит вердикт строго по приоритетам: пул не найден, все участники
    /// на месте, critical-порог, warning-порог, иначе OK.
    pub fn evaluate(
        pool: &str,
        counters: &PoolCounters,
        warning: i64,
        critical: i64,
    ) -> Result<Evaluation, CheckError> {
        // Нет записи о доступности — нет и пула
        if counters.pool_status.is_none() {
            return Ok(Evaluation {
                state: ServiceState::Critical,
                message: NagiosFormatter::pool_not_found(pool),
            });
        }

        let active =
            Self::parse_counter(pool, "activeMembers", counters.active_members.as_deref())?;
        let available = Self::parse_counter(
            pool,
            "availableMembers",
            counters.available_members.as_deref(),
        )?;

        let state = if active == available {
            ServiceState::Ok
        } else if active <= critical {
            ServiceState::Critical
        } else if active <= warning {
            ServiceState::Warning
        } else {
            // active выше warning, но не равно available: активных больше,
            // чем сконфигурировано. Переходное состояние агента, считается OK.
            ServiceState::Ok
        };

        Ok(Evaluation {
            message: NagiosFormatter::status_line(
                state, pool, active, available, warning, critical,
            ),
            state,
        })
    }

    /// Пул в таблице доступности есть, а счётчика нет или он не число —
    /// битый ответ агента
    fn parse_counter(pool: &str, name: &str, raw: Option<&str>) -> Result<i64, CheckError> {
        let raw = raw.ok_or_else(|| CheckError::BadCounter {
            pool: pool.to_string(),
            detail: format!("{} missing from walk results", name),
        })?;

        raw.parse::<i64>().map_err(|_| CheckError::BadCounter {
            pool: pool.to_string(),
            detail: format!("{} = '{}' is not an integer", name, raw),
        })
    }
}
