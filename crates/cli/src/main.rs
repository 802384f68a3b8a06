use clap::{Parser, Subcommand};
use menu_core::json::document_to_json;
use menu_core::{
    bson::Document, open_store, CatalogService, CoreConfig, FoodOrderService, ReservationService,
};

#[derive(Parser)]
#[command(name = "menu")]
#[command(about = "Restaurant menu backend CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the food catalog
    Food,
    /// List reservation places
    Reservations,
    /// List saved table bookings
    Bookings,
    /// List food orders with their totals
    FoodOrders {
        /// Print the full order documents as JSON
        #[arg(long)]
        json: bool,
    },
}

fn print_documents(documents: &[Document]) -> Result<(), Box<dyn std::error::Error>> {
    if documents.is_empty() {
        println!("No documents found.");
        return Ok(());
    }
    for document in documents {
        println!("{}", serde_json::to_string(&document_to_json(document))?);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use 'menu --help' for commands");
        return Ok(());
    };

    let cfg = CoreConfig::from_env()?;
    let store = open_store(&cfg).await?;

    match command {
        Commands::Food => {
            let food = CatalogService::new(store).list_food().await?;
            print_documents(&food)?;
        }
        Commands::Reservations => {
            let reservations = ReservationService::new(store).list_reservations().await?;
            print_documents(&reservations)?;
        }
        Commands::Bookings => {
            let bookings = ReservationService::new(store).list_bookings().await?;
            print_documents(&bookings)?;
        }
        Commands::FoodOrders { json } => {
            let orders = FoodOrderService::new(store)
                .list_food_orders_with_totals()
                .await?;
            if orders.is_empty() {
                println!("No food orders found.");
            }
            for order in orders {
                if json {
                    println!("{}", serde_json::to_string(&order.to_json())?);
                } else {
                    println!(
                        "User: {}, Items: {}, Total: {}",
                        order.username().unwrap_or("-"),
                        order
                            .order()
                            .get_array("items")
                            .map(|items| items.len())
                            .unwrap_or(0),
                        order.total_price()
                    );
                }
            }
        }
    }

    Ok(())
}
