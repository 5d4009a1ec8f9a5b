//! Domain Risk Engine
//!
//! Turns the raw output of six independent signal collectors (WHOIS, SSL,
//! DNS, blacklist, hosting, page content) into one explainable verdict.
//!
//! ```ignore
//! use domain_risk_engine::logic::analysis::RiskAnalyzer;
//!
//! let report = RiskAnalyzer::default().analyze(bundle);
//! println!("{} ({:.2})", report.verdict, report.risk_score);
//! ```

pub mod constants;
pub mod logic;

pub use logic::analysis::{analyze, DomainReport, RiskAnalyzer};
pub use logic::signals::SignalBundle;
pub use logic::threat::Verdict;
