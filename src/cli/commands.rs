//! Command handlers mapping CLI invocations onto the core services.

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use shopbook_core::{
    api_category_totals, api_create_business, api_ensure_user, api_fiscal_summary,
    api_forecast_sales, api_record_movement, api_sales_series, BusinessService, Clock,
    MovementService, ProductChanges, ProductService, SystemClock, UserService,
};

use crate::cli::{context::CliContext, output, CliError};

const USAGE: &str = "\
shopbook_cli <command>

  signin <subject> <email> <name>
  business add <email> <name>
  business list <email>
  movement add <email> <business-id> <date> <time> <kind> <amount> [category] [note]
  movement list <email> <business-id>
  movement show <email> <movement-id>
  product add <email> <business-id> <name> <cost> <price> <stock>
  product update <email> <product-id> [name=..] [cost=..] [price=..] [stock=..]
  product list <email> <business-id>
  sales <email> <business-id> [days]
  categories <email> <business-id>
  fiscal <email> <business-id> <year> <month>
  forecast <email> <business-id> [days]
  ledgers
";

pub fn dispatch(args: &[String]) -> Result<(), CliError> {
    let Some(command) = args.first() else {
        print!("{USAGE}");
        return Ok(());
    };
    match command.as_str() {
        "signin" => signin(&args[1..]),
        "business" => business(&args[1..]),
        "movement" => movement(&args[1..]),
        "product" => product(&args[1..]),
        "sales" => sales(&args[1..]),
        "categories" => categories(&args[1..]),
        "fiscal" => fiscal(&args[1..]),
        "forecast" => forecast(&args[1..]),
        "ledgers" => ledgers(),
        "help" | "--help" | "-h" => {
            print!("{USAGE}");
            Ok(())
        }
        other => Err(CliError::Usage(format!("unknown command `{other}`"))),
    }
}

fn signin(args: &[String]) -> Result<(), CliError> {
    let subject = require(args, 0, "subject")?;
    let email = require(args, 1, "email")?;
    let name = require(args, 2, "name")?;
    let mut ctx = CliContext::open()?;
    let user_id = api_ensure_user(&mut ctx.ledger, subject, email, name)?;
    ctx.save()?;
    output::notice(&format!("signed in as {user_id}"));
    Ok(())
}

fn business(args: &[String]) -> Result<(), CliError> {
    match require(args, 0, "subcommand")? {
        "add" => {
            let email = require(args, 1, "email")?;
            let name = require(args, 2, "name")?;
            let mut ctx = CliContext::open()?;
            let owner = UserService::by_email(&ctx.ledger, email)?.id;
            let business_id = api_create_business(&mut ctx.ledger, owner, name)?;
            ctx.save()?;
            output::notice(&format!("created business {business_id}"));
            Ok(())
        }
        "list" => {
            let email = require(args, 1, "email")?;
            let ctx = CliContext::open()?;
            let owner = UserService::by_email(&ctx.ledger, email)?.id;
            output::heading(&format!("Businesses of {email}"));
            output::print_json(&BusinessService::list_for_owner(&ctx.ledger, owner))
        }
        other => Err(CliError::Usage(format!("unknown subcommand `{other}`"))),
    }
}

fn movement(args: &[String]) -> Result<(), CliError> {
    match require(args, 0, "subcommand")? {
        "add" => {
            let email = require(args, 1, "email")?;
            let business_id = parse_uuid(require(args, 2, "business id")?)?;
            let date = parse_date(require(args, 3, "date")?)?;
            let time = parse_time(require(args, 4, "time")?)?;
            let kind = require(args, 5, "kind")?;
            let amount = parse_number(require(args, 6, "amount")?)?;
            let category = args.get(7).cloned();
            let note = args.get(8).cloned();

            let mut ctx = CliContext::open()?;
            let user = UserService::by_email(&ctx.ledger, email)?.id;
            BusinessService::ensure_owned(&ctx.ledger, user, business_id)?;
            let movement_id = api_record_movement(
                &mut ctx.ledger,
                business_id,
                date,
                time,
                kind,
                amount,
                category,
                note,
            )?;
            ctx.save()?;
            output::notice(&format!("recorded movement {movement_id}"));
            Ok(())
        }
        "list" => {
            let email = require(args, 1, "email")?;
            let business_id = parse_uuid(require(args, 2, "business id")?)?;
            let ctx = CliContext::open()?;
            let user = UserService::by_email(&ctx.ledger, email)?.id;
            BusinessService::ensure_owned(&ctx.ledger, user, business_id)?;
            output::print_json(&MovementService::list(&ctx.ledger, business_id)?)
        }
        "show" => {
            let email = require(args, 1, "email")?;
            let movement_id = parse_uuid(require(args, 2, "movement id")?)?;
            let ctx = CliContext::open()?;
            let user = UserService::by_email(&ctx.ledger, email)?.id;
            let movement = MovementService::get(&ctx.ledger, movement_id)?;
            BusinessService::ensure_owned(&ctx.ledger, user, movement.business_id)?;
            output::print_json(&movement)
        }
        other => Err(CliError::Usage(format!("unknown subcommand `{other}`"))),
    }
}

fn product(args: &[String]) -> Result<(), CliError> {
    match require(args, 0, "subcommand")? {
        "add" => {
            let email = require(args, 1, "email")?;
            let business_id = parse_uuid(require(args, 2, "business id")?)?;
            let name = require(args, 3, "name")?;
            let cost = parse_number(require(args, 4, "cost")?)?;
            let price = parse_number(require(args, 5, "price")?)?;
            let stock = parse_stock(require(args, 6, "stock")?)?;

            let mut ctx = CliContext::open()?;
            let user = UserService::by_email(&ctx.ledger, email)?.id;
            BusinessService::ensure_owned(&ctx.ledger, user, business_id)?;
            let product_id =
                ProductService::record(&mut ctx.ledger, business_id, name, cost, price, stock)?;
            ctx.save()?;
            output::notice(&format!("created product {product_id}"));
            Ok(())
        }
        "update" => {
            let email = require(args, 1, "email")?;
            let product_id = parse_uuid(require(args, 2, "product id")?)?;
            let changes = parse_product_changes(&args[3..])?;

            let mut ctx = CliContext::open()?;
            let user = UserService::by_email(&ctx.ledger, email)?.id;
            let owning_business = ctx
                .ledger
                .product(product_id)
                .map(|product| product.business_id)
                .ok_or(shopbook_core::CoreError::ProductNotFound(product_id))?;
            BusinessService::ensure_owned(&ctx.ledger, user, owning_business)?;
            ProductService::update(&mut ctx.ledger, product_id, changes)?;
            ctx.save()?;
            output::notice(&format!("updated product {product_id}"));
            Ok(())
        }
        "list" => {
            let email = require(args, 1, "email")?;
            let business_id = parse_uuid(require(args, 2, "business id")?)?;
            let ctx = CliContext::open()?;
            let user = UserService::by_email(&ctx.ledger, email)?.id;
            BusinessService::ensure_owned(&ctx.ledger, user, business_id)?;
            output::print_json(&ProductService::list(&ctx.ledger, business_id)?)
        }
        other => Err(CliError::Usage(format!("unknown subcommand `{other}`"))),
    }
}

fn sales(args: &[String]) -> Result<(), CliError> {
    let email = require(args, 0, "email")?;
    let business_id = parse_uuid(require(args, 1, "business id")?)?;
    let ctx = CliContext::open()?;
    let days = match args.get(2) {
        Some(raw) => parse_days(raw)?,
        None => ctx.config.sales_window_days,
    };
    let user = UserService::by_email(&ctx.ledger, email)?.id;
    BusinessService::ensure_owned(&ctx.ledger, user, business_id)?;
    let today = SystemClock.today();
    let series = api_sales_series(&ctx.ledger, business_id, today, days)?;
    output::heading(&format!("Daily sales, last {days} days"));
    output::print_json(&series)
}

fn categories(args: &[String]) -> Result<(), CliError> {
    let email = require(args, 0, "email")?;
    let business_id = parse_uuid(require(args, 1, "business id")?)?;
    let ctx = CliContext::open()?;
    let user = UserService::by_email(&ctx.ledger, email)?.id;
    BusinessService::ensure_owned(&ctx.ledger, user, business_id)?;
    output::print_json(&api_category_totals(&ctx.ledger, business_id)?)
}

fn fiscal(args: &[String]) -> Result<(), CliError> {
    let email = require(args, 0, "email")?;
    let business_id = parse_uuid(require(args, 1, "business id")?)?;
    let year = parse_year(require(args, 2, "year")?)?;
    let month = parse_month(require(args, 3, "month")?)?;
    let ctx = CliContext::open()?;
    let user = UserService::by_email(&ctx.ledger, email)?.id;
    BusinessService::ensure_owned(&ctx.ledger, user, business_id)?;
    output::print_json(&api_fiscal_summary(&ctx.ledger, business_id, year, month)?)
}

fn forecast(args: &[String]) -> Result<(), CliError> {
    let email = require(args, 0, "email")?;
    let business_id = parse_uuid(require(args, 1, "business id")?)?;
    let ctx = CliContext::open()?;
    let days = match args.get(2) {
        Some(raw) => parse_days(raw)?,
        None => ctx.config.forecast_horizon_days,
    };
    let user = UserService::by_email(&ctx.ledger, email)?.id;
    BusinessService::ensure_owned(&ctx.ledger, user, business_id)?;
    let points = api_forecast_sales(&ctx.ledger, business_id, days)?;
    output::heading(&format!("Sales forecast, next {days} days"));
    output::print_json(&points)
}

fn ledgers() -> Result<(), CliError> {
    let ctx = CliContext::open()?;
    output::heading("Ledgers");
    for entry in ctx.storage().list_ledger_metadata()? {
        println!(
            "{}  businesses={} movements={} products={} ({})",
            entry.slug,
            entry.business_count,
            entry.movement_count,
            entry.product_count,
            entry.path.display()
        );
    }
    Ok(())
}

fn require<'a>(args: &'a [String], index: usize, name: &str) -> Result<&'a str, CliError> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| CliError::Usage(format!("missing argument: {name}")))
}

fn parse_uuid(raw: &str) -> Result<Uuid, CliError> {
    raw.parse()
        .map_err(|_| CliError::Usage(format!("`{raw}` is not a valid id")))
}

fn parse_date(raw: &str) -> Result<NaiveDate, CliError> {
    raw.parse()
        .map_err(|_| CliError::Usage(format!("`{raw}` is not a date (expected YYYY-MM-DD)")))
}

fn parse_time(raw: &str) -> Result<NaiveTime, CliError> {
    raw.parse()
        .map_err(|_| CliError::Usage(format!("`{raw}` is not a time (expected HH:MM:SS)")))
}

fn parse_number(raw: &str) -> Result<f64, CliError> {
    raw.parse()
        .map_err(|_| CliError::Usage(format!("`{raw}` is not a number")))
}

fn parse_stock(raw: &str) -> Result<i64, CliError> {
    raw.parse()
        .map_err(|_| CliError::Usage(format!("`{raw}` is not an integer")))
}

fn parse_days(raw: &str) -> Result<u32, CliError> {
    raw.parse()
        .map_err(|_| CliError::Usage(format!("`{raw}` is not a day count")))
}

fn parse_year(raw: &str) -> Result<i32, CliError> {
    raw.parse()
        .map_err(|_| CliError::Usage(format!("`{raw}` is not a year")))
}

fn parse_month(raw: &str) -> Result<u32, CliError> {
    raw.parse()
        .map_err(|_| CliError::Usage(format!("`{raw}` is not a month")))
}

fn parse_product_changes(args: &[String]) -> Result<ProductChanges, CliError> {
    let mut changes = ProductChanges::default();
    for pair in args {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| CliError::Usage(format!("expected key=value, got `{pair}`")))?;
        match key {
            "name" => changes.name = Some(value.to_string()),
            "cost" => changes.cost = Some(parse_number(value)?),
            "price" => changes.price = Some(parse_number(value)?),
            "stock" => changes.stock = Some(parse_stock(value)?),
            other => {
                return Err(CliError::Usage(format!("unknown product field `{other}`")));
            }
        }
    }
    Ok(changes)
}
