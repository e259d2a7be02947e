//! `vendash` — terminal client for the ONDC vendor backend.

use std::sync::Arc;

use anyhow::{Context, bail};
use chrono::Utc;

use vendash_client::HttpBackend;
use vendash_console::{
    Config, Notifier, PrintNotifier, PromptGate, Session, low_stock_notices,
};
use vendash_console::render;
use vendash_core::{NewInventory, OrderId, OutletId, ProductId, SellerAppId};
use vendash_events::InMemoryEventBus;
use vendash_inventory::StockReconciler;
use vendash_orders::OrderActions;

const USAGE: &str = "usage: vendash <command>

commands:
  dashboard                              aggregate view across all vendors (default)
  inventory                              merged inventory with low-stock notices
  orders                                 all orders
  seller-apps                            registered seller apps
  seller-apps health <app-id>            explicit health check
  seller-apps items <app-id>             inventory as held by one seller app
  search <query>                         search orders, inventory and seller apps
  update-stock <product> <outlet> <qty>  set stock and sync to seller apps
  add-inventory <product> <outlet> <qty> [reorder-level]
                                         create an inventory record
  accept <order-id>                      accept a pending order
  reject <order-id> [reason..]           reject a pending order
  sync-all                               push all inventory to seller apps

environment:
  VENDASH_API_URL     backend base URL (default http://localhost:8080)
  VENDASH_VENDOR_ID   vendor scope for search and sync-all (default 1)";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vendash_observability::init();

    let config = Config::from_env()?;
    let backend = Arc::new(HttpBackend::new(&config.api_url));
    let bus = Arc::new(InMemoryEventBus::new());
    let mut session = Session::new(Arc::clone(&backend), Arc::clone(&bus), config.vendor_id);
    let notifier = PrintNotifier;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let sub = session.subscribe();

    match args.first().map(String::as_str) {
        None | Some("dashboard") => {
            let view = session.load_dashboard(Utc::now().date_naive()).await?;
            print!("{}", render::render_dashboard(&view));
            for notice in low_stock_notices(session.inventory()) {
                notifier.notify(&notice);
            }
        }
        Some("inventory") => {
            session.load_inventory().await?;
            print!("{}", render::render_inventory(session.inventory()));
            for notice in low_stock_notices(session.inventory()) {
                notifier.notify(&notice);
            }
        }
        Some("orders") => {
            session.load_orders().await?;
            print!("{}", render::render_orders(session.orders()));
        }
        Some("seller-apps") => match args.get(1).map(String::as_str) {
            None => {
                session.load_seller_apps().await?;
                print!("{}", render::render_seller_apps(session.seller_apps()));
            }
            Some("health") => {
                let app: SellerAppId = arg(&args, 2, "app-id")?;
                let notice = session.check_health(app).await;
                notifier.notify(&notice);
                print!("{}", render::render_seller_apps(session.seller_apps()));
            }
            Some("items") => {
                let app: SellerAppId = arg(&args, 2, "app-id")?;
                let items = session.seller_app_items(app).await?;
                print!("{}", render::render_synced_items(&items));
            }
            Some(other) => bail!("unknown seller-apps subcommand {other:?}\n\n{USAGE}"),
        },
        Some("search") => {
            let query = args.get(1).context("search needs a query")?;
            let hits = session.search(query).await;
            print!("{}", render::render_hits(&hits));
        }
        Some("update-stock") => {
            let product: ProductId = arg(&args, 1, "product-id")?;
            let outlet: OutletId = arg(&args, 2, "outlet-id")?;
            let qty = args.get(3).context("update-stock needs a quantity")?;

            let reconciler = StockReconciler::new(Arc::clone(&backend), Arc::clone(&bus));
            let notice = reconciler
                .update_stock(&mut session.sync, product, outlet, qty)
                .await;
            notifier.notify(&notice);
            session.apply_refreshes(&sub).await;
        }
        Some("add-inventory") => {
            let body = NewInventory {
                product_id: arg(&args, 1, "product-id")?,
                outlet_id: arg(&args, 2, "outlet-id")?,
                total_stock: arg(&args, 3, "qty")?,
                reorder_level: args.get(4).map(|raw| raw.parse()).transpose()
                    .context("invalid <reorder-level>")?,
            };
            let reconciler = StockReconciler::new(Arc::clone(&backend), Arc::clone(&bus));
            let notice = reconciler.add_inventory(&body).await;
            notifier.notify(&notice);
            session.apply_refreshes(&sub).await;
        }
        Some("accept") => {
            let order: OrderId = arg(&args, 1, "order-id")?;
            let actions = OrderActions::new(Arc::clone(&backend), Arc::clone(&bus), PromptGate);
            if let Some(notice) = actions.accept(order).await {
                notifier.notify(&notice);
                session.apply_refreshes(&sub).await;
            }
        }
        Some("reject") => {
            let order: OrderId = arg(&args, 1, "order-id")?;
            let reason = args[2..].join(" ");
            let actions = OrderActions::new(Arc::clone(&backend), Arc::clone(&bus), PromptGate);
            if let Some(notice) = actions.reject(order, &reason).await {
                notifier.notify(&notice);
                session.apply_refreshes(&sub).await;
            }
        }
        Some("sync-all") => {
            let reconciler = StockReconciler::new(Arc::clone(&backend), Arc::clone(&bus));
            let notice = reconciler.sync_vendor(config.vendor_id).await;
            notifier.notify(&notice);
            session.apply_refreshes(&sub).await;
        }
        Some("help") | Some("--help") | Some("-h") => println!("{USAGE}"),
        Some(other) => bail!("unknown command {other:?}\n\n{USAGE}"),
    }

    Ok(())
}

fn arg<T>(args: &[String], idx: usize, name: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    args.get(idx)
        .with_context(|| format!("missing argument <{name}>\n\n{USAGE}"))?
        .parse::<T>()
        .with_context(|| format!("invalid <{name}>"))
}
