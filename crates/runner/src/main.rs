//! `mediabot-runner` -- sequential build robot orchestrator.
//!
//! Invokes the Node.js build robots in a fixed order, halting at the
//! first failure and reporting colored status to the terminal. Exits 0
//! when every robot succeeds, 1 otherwise.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mediabot_core::robots::node::NodeExecutor;
use mediabot_core::robots::report::RunOutcome;
use mediabot_runner::{console, sequence};

/// The robots, in the exact order they must run.
///
/// Add or remove robots here; the listed order is the build order.
const ROBOT_SCRIPTS: &[&str] = &[
    "build-upcoming-tv.js",
    "build-archive-tv.js",
    "build-movies.js",
    "build-rawg.js",
    "build-master.js",
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mediabot_runner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    console::banner();

    let executor = NodeExecutor::new();
    let report = sequence::run_robots(&executor, ROBOT_SCRIPTS).await;

    match report.outcome {
        RunOutcome::Success => {
            console::all_succeeded();
        }
        RunOutcome::Failed { robot, .. } => {
            console::halted(&robot);
            std::process::exit(1);
        }
    }
}
