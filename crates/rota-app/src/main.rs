//! Cleaning rota entry point.
//!
//! Headless variant of the duty screen: loads preferences, builds the
//! start-up view model, and renders today's duty (assignment card plus a
//! textual dump of the diagram cells) to stdout.  A GUI build would hand the
//! same [`DutyView`] to its canvas instead of printing it.

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rota_app::application::show_duty::DutyView;
use rota_app::application::view_flow::ViewState;
use rota_app::infrastructure::clock::{Clock, SystemClock};
use rota_app::infrastructure::storage::{FilePrefsStore, PrefsStore};
use rota_app::Session;
use rota_core::diagram::cells::{CellKind, HIGHLIGHT_FILL};
use rota_core::{HeuristicTextMeasure, ROSTER};

/// Canvas size the headless render lays the diagram out against.
const VIEWPORT: (f32, f32) = (1080.0, 1440.0);

fn main() -> anyhow::Result<()> {
    let store = FilePrefsStore::at_default_location()?;

    // Initialise structured logging before anything logs.  `RUST_LOG` wins;
    // the persisted preference is the fallback.
    let fallback = store.load()?.log_level;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();

    info!("cleaning rota starting");

    let clock = SystemClock;
    let session = Session::start(store, clock)?;

    match session.model().state {
        ViewState::FirstRun => {
            println!("Welcome to the Cohort 9 Cleaning Rota");
            println!("Please select your name to get started:");
            for student in ROSTER {
                println!("  - {student}");
            }
        }
        ViewState::Selecting => {
            println!("Select a student:");
            for student in ROSTER {
                println!("  - {student}");
            }
        }
        _ => match &session.model().selected_student {
            Some(student) => render_duty(student, &clock),
            None => {
                // Welcoming/ViewingDuty without a student cannot arise from
                // ViewModel::initial; log it rather than trusting it.
                warn!("no selected student outside the selection states");
            }
        },
    }

    info!("cleaning rota stopped");
    Ok(())
}

/// Prints the composed duty screen for `student` today.
fn render_duty(student: &str, clock: &dyn Clock) {
    let today = clock.today();
    let measure = HeuristicTextMeasure::default();
    let view = DutyView::compose(student, today, today, VIEWPORT.0, VIEWPORT.1, &measure);

    println!("{}", view.date_line);
    println!("{}", view.headline);
    println!("{}", view.description);
    println!("(avatar: {})", view.avatar);
    println!();
    println!("Floor plan ({} cells, * = your area):", view.cells.len());
    for cell in &view.cells {
        let marker = if cell.fill == HIGHLIGHT_FILL { "*" } else { " " };
        let label = match cell.kind {
            CellKind::Area(code) => code.as_str(),
            CellKind::Decorative => cell.label.text.as_str(),
        };
        println!(
            "  {marker} {label:<18} at ({:>6.1}, {:>6.1})  {:>5.1} x {:>5.1}",
            cell.rect.x, cell.rect.y, cell.rect.width, cell.rect.height
        );
    }
}
