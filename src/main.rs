//! check_bigip_pools: Nagios-проверка пула F5 BIG-IP по SNMPv2c.
//!
//! Делает три walk'а по F5 MIB, достаёт счётчики участников именованного
//! пула и печатает одну строку статуса с кодом выхода для Nagios.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod collector;
mod config;
mod error;
mod evaluator;
mod formatter;
mod snmp;

use collector::PoolCollector;
use config::{Args, CheckConfig};
use error::CheckError;
use evaluator::{Evaluation, PoolEvaluator};

/// stdout занят протоколом Nagios, поэтому лог уходит в stderr
/// и по умолчанию молчит
const DEFAULT_LOG_FILTER: &str = "check_bigip_pools=warn";

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    // Валидация конфигурации происходит до любых сетевых вызовов
    let config = match CheckConfig::from_args(Args::parse()) {
        Ok(config) => config,
        Err(e) => return finish(Err(e)),
    };

    finish(run_check(&config).await)
}

async fn run_check(config: &CheckConfig) -> Result<Evaluation, CheckError> {
    let target = config.target();

    let mut client = snmp::create_v2c_client(&target, config.community.as_bytes())
        .await
        .map_err(|e| CheckError::session(&target, e))?;

    let counters = PoolCollector::collect(&mut client, config).await?;

    PoolEvaluator::evaluate(&config.pool, &counters, config.warning, config.critical)
}

/// Печатает итоговую строку и сопоставляет её коду выхода
fn finish(result: Result<Evaluation, CheckError>) -> ExitCode {
    match result {
        Ok(evaluation) => {
            println!("{}", evaluation.message);
            ExitCode::from(evaluation.state.exit_code())
        }
        Err(e) => {
            println!("{}", e);
            ExitCode::from(e.state().exit_code())
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
