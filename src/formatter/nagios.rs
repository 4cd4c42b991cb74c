use crate::evaluator::ServiceState;

/// Форматтер строк в соглашениях Nagios-плагинов
pub struct NagiosFormatter;

impl NagiosFormatter {
    /// Основная строка статуса. После `|` идёт перфдата
    /// в синтаксисе `label=value;warn;crit`.
    pub fn status_line(
        state: ServiceState,
        pool: &str,
        active: i64,
        available: i64,
        warning: i64,
        critical: i64,
    ) -> String {
        format!(
            "{} - Pool: {}, Active members: {}/{} | \
             activeMembers={};{};{} availableMembers={};{};{}",
            state.label(),
            pool,
            active,
            available,
            active,
            warning,
            critical,
            available,
            warning,
            critical
        )
    }

    pub fn pool_not_found(pool: &str) -> String {
        format!("CRITICAL - Can't find pool: {}", pool)
    }
}
