//! listochki - browse the Umnye Listochki worksheet catalog from a terminal.
//!
//! Every command prints pretty JSON on stdout; logs go to stderr (and to a
//! daily log file when `LISTOCHKI_LOG_DIR` is set).

use std::io;

use anyhow::{bail, Context, Result};
use listochki_core::api::WorksheetFilters;
use listochki_core::models::{CategoryTree, SiteSettings};
use listochki_core::routes::{PageKind, Router};
use listochki_core::stores::{CategoriesStore, SettingsStore};
use listochki_core::{ApiClient, Config};
use serde::Serialize;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Directory for the optional rolling log file
const LOG_DIR_ENV: &str = "LISTOCHKI_LOG_DIR";

const USAGE: &str = "\
Usage: listochki <command> [args]

Commands:
  categories                 flat category list
  tree                       category tree
  category <slug>            one category with its children
  category-worksheets <slug> [page]
  tags                       all tags
  popular                    top 20 tags
  tag <slug>                 one tag
  tag-worksheets <slug> [page]
  settings                   site settings
  worksheets [key=value ...] catalog page (page, page_size, category,
                             category__slug, grade_level, difficulty,
                             search, ordering, tags__slug)
  featured                   featured worksheets
  search <query> [page]      full-text search
  worksheet <slug>           worksheet detail
  similar <slug>             worksheets from the same category
  download-url <id>          print the download URL
  download <id> <file>       save the worksheet file
  route <path>               resolve a client route
  overview                   load category tree and settings together";

/// Initialize the tracing subscriber for logging
fn init_tracing() -> Option<WorkerGuard> {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let (file_layer, guard) = match std::env::var(LOG_DIR_ENV) {
        Ok(dir) if !dir.is_empty() => {
            let appender = tracing_appender::rolling::daily(dir, "listochki.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().with_writer(writer).with_ansi(false)), Some(guard))
        }
        _ => (None, None),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(file_layer)
        .with(filter)
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();
    let _log_guard = init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        eprintln!("{}", USAGE);
        return Ok(());
    };

    let config = Config::load().context("Failed to load configuration")?;
    info!(base_url = %config.base_url, source = ?config.source, "listochki starting");
    let client = ApiClient::new(&config).context("Failed to create API client")?;

    run(&client, command, &args[1..]).await
}

async fn run(client: &ApiClient, command: &str, args: &[String]) -> Result<()> {
    match command {
        "categories" => print_json(&client.categories().list().await?),
        "tree" => print_json(&client.categories().tree().await?),
        "category" => print_json(&client.categories().detail(arg(args, 0, "slug")?).await?),
        "category-worksheets" => {
            let page = optional_page(args, 1)?;
            print_json(&client.categories().worksheets(arg(args, 0, "slug")?, page).await?)
        }
        "tags" => print_json(&client.tags().list().await?),
        "popular" => print_json(&client.tags().popular().await?),
        "tag" => print_json(&client.tags().detail(arg(args, 0, "slug")?).await?),
        "tag-worksheets" => {
            let page = optional_page(args, 1)?;
            print_json(&client.tags().worksheets(arg(args, 0, "slug")?, page).await?)
        }
        "settings" => print_json(&client.settings().get().await?),
        "worksheets" => {
            let filters = parse_filters(args)?;
            print_json(&client.worksheets().list(&filters).await?)
        }
        "featured" => print_json(&client.worksheets().featured().await?),
        "search" => {
            let page = optional_page(args, 1)?;
            print_json(&client.worksheets().search(arg(args, 0, "query")?, page).await?)
        }
        "worksheet" => print_json(&client.worksheets().detail(arg(args, 0, "slug")?).await?),
        "similar" => print_json(&client.worksheets().similar(arg(args, 0, "slug")?).await?),
        "download-url" => {
            println!("{}", client.worksheets().download_url(parse_id(args)?));
            Ok(())
        }
        "download" => {
            let id = parse_id(args)?;
            let target = arg(args, 1, "file")?;
            let bytes = client.worksheets().download(id).await?;
            std::fs::write(target, &bytes).with_context(|| format!("Failed to write {}", target))?;
            eprintln!("Saved {} bytes to {}", bytes.len(), target);
            Ok(())
        }
        "route" => route(arg(args, 0, "path")?),
        "overview" => overview(client).await,
        other => bail!("Unknown command: {}\n\n{}", other, USAGE),
    }
}

fn arg<'a>(args: &'a [String], index: usize, name: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .with_context(|| format!("Missing argument <{}>", name))
}

fn parse_id(args: &[String]) -> Result<i64> {
    let raw = arg(args, 0, "id")?;
    raw.parse().with_context(|| format!("Invalid worksheet id: {}", raw))
}

fn optional_page(args: &[String], index: usize) -> Result<Option<u32>> {
    args.get(index)
        .map(|raw| raw.parse().with_context(|| format!("Invalid page: {}", raw)))
        .transpose()
}

fn parse_filters(args: &[String]) -> Result<WorksheetFilters> {
    let mut filters = WorksheetFilters::default();
    for pair in args {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("Expected key=value, got {}", pair);
        };
        if !filters.set(key, value) {
            bail!("Unknown or invalid filter: {}", pair);
        }
    }
    Ok(filters)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn route(path: &str) -> Result<()> {
    let mut router: Router<&'static str> = Router::default();
    router
        .register(PageKind::Home, || "HomePage")
        .register(PageKind::WorksheetList, || "WorksheetListPage")
        .register(PageKind::WorksheetDetail, || "WorksheetDetailPage")
        .register(PageKind::Static, || "StaticPage");

    let navigation = router.navigate(path)?;

    #[derive(Serialize)]
    struct RouteOutput<'a> {
        component: &'a str,
        scroll_top: u32,
        #[serde(flatten)]
        route: &'a listochki_core::routes::RouteMatch,
    }

    print_json(&RouteOutput {
        component: *navigation.component,
        scroll_top: navigation.scroll_top,
        route: &navigation.route,
    })
}

async fn overview(client: &ApiClient) -> Result<()> {
    let categories = CategoriesStore::new(client.categories().clone());
    let settings = SettingsStore::new(client.settings().clone());

    futures::join!(categories.fetch(), settings.fetch());

    #[derive(Serialize)]
    struct Overview {
        settings: Option<SiteSettings>,
        page_size: u32,
        categories: Vec<CategoryTree>,
        errors: Vec<String>,
    }

    print_json(&Overview {
        settings: settings.settings(),
        page_size: settings.page_size(),
        categories: categories.category_tree(),
        errors: [categories.error(), settings.error()].into_iter().flatten().collect(),
    })
}
