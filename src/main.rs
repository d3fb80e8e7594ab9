use course_cart_core::app::{fetch_course_list, run_session, SelectionSession};
use course_cart_core::client::request::create_client;
use course_cart_core::error::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_ENDPOINT: &str = "http://localhost:4232/courseList";

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("course_cart_core=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 2 {
        println!("Usage: {} [course-list-endpoint]", args[0]);
        return Ok(());
    }

    let endpoint = args
        .get(1)
        .cloned()
        .or_else(|| std::env::var("COURSE_LIST_ENDPOINT").ok())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    tracing::info!("Fetching course list from {}", endpoint);
    println!("Loading courses...");

    let client = create_client().await?;
    let courses = fetch_course_list(&client, &endpoint).await?;

    let mut session = SelectionSession::new(courses);
    run_session(&mut session)?;

    Ok(())
}
