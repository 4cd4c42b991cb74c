/// Сырые показания пула, извлечённые из трёх поддеревьев F5 MIB.
/// None означает, что в поддереве не нашлось записи с суффиксом пула.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolCounters {
    /// Активные участники пула
    pub active_members: Option<String>,
    /// Сконфигурированные участники пула
    pub available_members: Option<String>,
    /// Запись о доступности; служит признаком того, что пул вообще существует
    pub pool_status: Option<String>,
}
