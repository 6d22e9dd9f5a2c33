use clap::{Parser, Subcommand};
use rocketcart::{Cart, CartError, Config, ProductId};

#[derive(Parser)]
#[command(name = "rocketcart")]
#[command(version)]
#[command(about = "Manage the RocketShoes shopping cart from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cart contents and total
    #[clap(visible_alias = "ls")]
    Show,
    /// Add one unit of a product to the cart
    #[clap(visible_alias = "a")]
    Add {
        /// Catalog product id
        product_id: ProductId,
    },
    /// Remove a product from the cart entirely
    #[clap(visible_alias = "rm")]
    Remove {
        /// Catalog product id
        product_id: ProductId,
    },
    /// Set the absolute quantity of a product already in the cart
    Set {
        /// Catalog product id
        product_id: ProductId,
        /// Desired quantity (zero or negative is ignored)
        amount: i64,
    },
    /// Empty the cart
    Clear,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", present(&e));
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), CartError> {
    let config = Config::new_default()?;
    let mut manager = rocketcart::open(&config)?;

    match command {
        Commands::Show => print_cart(manager.cart()),
        Commands::Add { product_id } => {
            manager.add_product(product_id)?;
            println!("✅ Added product {product_id}");
            print_cart(manager.cart());
        }
        Commands::Remove { product_id } => {
            manager.remove_product(product_id)?;
            println!("✅ Removed product {product_id}");
            print_cart(manager.cart());
        }
        Commands::Set { product_id, amount } => {
            manager.update_product_amount(product_id, amount)?;
            println!("✅ Set product {product_id} to {amount}");
            print_cart(manager.cart());
        }
        Commands::Clear => {
            manager.clear()?;
            println!("✅ Cart cleared");
        }
    }

    Ok(())
}

/// The notification layer: the core returns error kinds, presentation is
/// decided here.
fn present(err: &CartError) -> String {
    match err {
        CartError::StockExceeded { .. } => "requested quantity is out of stock".to_string(),
        CartError::NotInCart(id) => format!("product {id} is not in the cart"),
        other => other.to_string(),
    }
}

fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("Cart is empty");
        return;
    }

    for item in cart.items() {
        println!(
            "{} x {} (id {}) R$ {:.2}",
            item.amount, item.name, item.id, item.price
        );
    }
    println!("Total: R$ {:.2}", cart.total());
}
