use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use rust_decimal::Decimal;
use stockpile::api::{CmdMessage, ConfigAction, MessageLevel, StockApi};
use stockpile::config::StockConfig;
use stockpile::error::Result;
use stockpile::external;
use stockpile::model::Product;
use stockpile::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: StockApi<FileStore>,
    export_file: String,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Register {
            name,
            quantity,
            price,
        }) => handle_register(&mut ctx, name, quantity, price),
        Some(Commands::Sell { id, quantity }) => handle_sell(&mut ctx, id, quantity),
        Some(Commands::Restock { id, quantity }) => handle_restock(&mut ctx, id, quantity),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Find { term }) => handle_find(&ctx, term),
        Some(Commands::Export { path }) => handle_export(&ctx, path),
        Some(Commands::Open) => handle_open(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "stockpile", "stockpile")
            .expect("Could not determine data dir")
            .data_dir()
            .to_path_buf(),
    };

    let config = match StockConfig::load(&data_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "{}",
                format!("Warning: could not read config ({}). Using defaults.", e).yellow()
            );
            StockConfig::default()
        }
    };
    let store = FileStore::new(data_dir.clone(), config.data_file.clone());
    let api = StockApi::new(store, data_dir);

    Ok(AppContext {
        api,
        export_file: config.export_file,
    })
}

fn handle_register(ctx: &mut AppContext, name: String, quantity: u32, price: Decimal) -> Result<()> {
    let result = ctx.api.register(&name, quantity, price)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_sell(ctx: &mut AppContext, id: u32, quantity: u32) -> Result<()> {
    let result = ctx.api.sell(id, quantity)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_restock(ctx: &mut AppContext, id: u32, quantity: u32) -> Result<()> {
    let result = ctx.api.restock(id, quantity)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    print_products(&result.listed_products);
    print_messages(&result.messages);
    Ok(())
}

fn handle_find(ctx: &AppContext, term: String) -> Result<()> {
    let result = ctx.api.find(&term)?;
    print_products(&result.listed_products);
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(|| ctx.api.data_dir().join(&ctx.export_file));
    let result = ctx.api.export(path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_open(ctx: &AppContext) -> Result<()> {
    let path = ctx.api.data_path()?;
    external::open_path(&path)?;
    println!("Opened {}", path.display());
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("data-file = {}", config.data_file);
        println!("export-file = {}", config.export_file);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const NAME_WIDTH: usize = 32;

fn print_products(products: &[Product]) {
    if products.is_empty() {
        return;
    }

    let header = format!(
        "{:>4}  {:<width$}  {:>8}  {:>10}",
        "Id",
        "Name",
        "Qty",
        "Price",
        width = NAME_WIDTH
    );
    println!("{}", header.bold());

    for product in products {
        let name = truncate_to_width(&product.name, NAME_WIDTH);
        let padding = NAME_WIDTH.saturating_sub(name.width());
        println!(
            "{:>4}  {}{}  {:>8}  {:>10}",
            product.id,
            name,
            " ".repeat(padding),
            product.quantity,
            format!("{:.2}", product.price)
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_names_alone() {
        assert_eq!(truncate_to_width("Widget", 32), "Widget");
    }

    #[test]
    fn truncate_caps_long_names_with_ellipsis() {
        let long = "a".repeat(50);
        let truncated = truncate_to_width(&long, 10);
        assert!(truncated.ends_with('…'));
        assert!(truncated.width() <= 10);
    }
}
