//! Catalog inspection commands.

use super::CliError;

/// Print every product as a table row.
#[allow(clippy::print_stdout)]
pub async fn list_products() -> Result<(), CliError> {
    let client = super::client()?;
    let products = client.products().await?;

    println!("{:<6} {:<40} {:>10} {:>9}", "ID", "NAME", "PRICE", "DISCOUNT");
    for product in products {
        println!(
            "{:<6} {:<40} {:>10} {:>8}%",
            product.product_id, product.product_name, product.price, product.discount
        );
    }
    Ok(())
}
