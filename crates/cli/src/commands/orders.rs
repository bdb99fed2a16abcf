//! Order management commands.

use sphaerostyle_core::{OrderId, OrderStatus};

use super::CliError;

/// Print every order in the shop.
#[allow(clippy::print_stdout)]
pub async fn list() -> Result<(), CliError> {
    let client = super::client()?;
    let token = super::staff_token()?;
    let orders = client.all_orders(&token).await?;

    println!(
        "{:<6} {:<12} {:>10} {:<16} ADDRESS",
        "ID", "STATUS", "TOTAL", "METHOD"
    );
    for order in orders {
        println!(
            "{:<6} {:<12} {:>10} {:<16} {}",
            order.order_id, order.status, order.total, order.payment_method, order.user_address
        );
    }
    Ok(())
}

/// Move one order to a new status.
#[allow(clippy::print_stdout)]
pub async fn set_status(order_id: OrderId, status: OrderStatus) -> Result<(), CliError> {
    let client = super::client()?;
    let token = super::staff_token()?;
    client.update_order_status(&token, order_id, status).await?;
    println!("order {order_id} -> {status}");
    Ok(())
}
