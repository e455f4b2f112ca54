use std::io::{BufRead, Write};

use anyhow::Result;

use storefront_app::{telemetry, Session};
use storefront_catalog::{CatalogClient, CatalogStatus};
use storefront_products::ProductId;

const DEFAULT_API_URL: &str = "https://fakestoreapi.com";

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();

    let api_url = std::env::var("STOREFRONT_API_URL").unwrap_or_else(|_| {
        tracing::warn!("STOREFRONT_API_URL not set; using the public demo catalog");
        DEFAULT_API_URL.to_string()
    });

    let mut session = Session::new(CatalogClient::new(api_url));

    println!("loading catalog...");
    session.load_catalog().await;
    render_catalog(&session);

    println!();
    println!("commands: list | add <id> | remove <id> | cart | quit");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("list"), _) => render_catalog(&session),
            (Some("add"), Some(raw)) => match raw.parse::<ProductId>() {
                Ok(id) => match session.product(id) {
                    Some(product) => {
                        session.add_to_cart(product);
                        render_badge(&session);
                    }
                    None => println!("no product with id {id} in the catalog"),
                },
                Err(_) => println!("'{raw}' is not a product id"),
            },
            (Some("remove"), Some(raw)) => match raw.parse::<ProductId>() {
                Ok(id) => {
                    session.remove_from_cart(id);
                    render_badge(&session);
                }
                Err(_) => println!("'{raw}' is not a product id"),
            },
            (Some("cart"), _) => render_cart(&mut session),
            (Some("quit" | "exit"), _) => break,
            (Some(other), _) => println!("unknown command '{other}'"),
            (None, _) => {}
        }
    }

    Ok(())
}

fn render_catalog(session: &Session) {
    match session.catalog() {
        CatalogStatus::Loading => println!("catalog is still loading"),
        CatalogStatus::Failed(err) => println!("something went wrong: {err}"),
        CatalogStatus::Ready(snapshot) => {
            for product in &snapshot.products {
                println!(
                    "{:>4}  {:<48} {:>8.2}  [{}]",
                    product.id, product.title, product.price, product.category
                );
            }
            println!("({} products)", snapshot.products.len());
        }
    }
}

fn render_badge(session: &Session) {
    println!("cart: {} item(s)", session.cart().total_items());
}

fn render_cart(session: &mut Session) {
    session.open_cart();

    let view = session.view();
    if view.cart.is_empty() {
        println!("your cart is empty");
    } else {
        for entry in view.cart.entries() {
            println!(
                "{:>3} x {:<48} {:>8.2}",
                entry.amount(),
                entry.product().title,
                entry.line_total()
            );
        }
        println!("total: {:.2}", view.cart_total);
    }

    session.close_cart();
}
