pub mod nagios;

pub use nagios::NagiosFormatter;
