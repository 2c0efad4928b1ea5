use std::fmt::Write as _;

use boutique_core::Product;

fn price_label(product: &Product) -> String {
    let price = product.effective_price();
    if product.sale_price.is_some() {
        format!(
            "{price:.2} (was {:.2}, -{}%)",
            product.price, product.discount_percent
        )
    } else {
        format!("{price:.2}")
    }
}

fn stock_label(product: &Product) -> String {
    if product.is_in_stock() {
        format!("in stock ({})", product.stock)
    } else {
        "out of stock".to_owned()
    }
}

/// One-line summary used by `list`.
pub(crate) fn product_line(product: &Product) -> String {
    let colors: Vec<&str> = product.colors.iter().map(|c| c.name.as_str()).collect();
    let mut line = format!(
        "{:>6}  {:<28}  {:<28}  {:<16}  colors: {}",
        product.id,
        product.name,
        price_label(product),
        stock_label(product),
        colors.join(", ")
    );
    if !product.sizes.is_empty() {
        let _ = write!(line, "  sizes: {}", product.sizes.join(", "));
    }
    if product.is_new {
        line.push_str("  [new]");
    }
    line
}

/// Multi-line description used by `show`.
pub(crate) fn product_detail(product: &Product) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (#{})", product.name, product.id);
    let _ = writeln!(out, "category:    {}", product.category);
    let _ = writeln!(out, "price:       {}", price_label(product));
    let _ = writeln!(out, "stock:       {}", stock_label(product));
    if !product.description.is_empty() {
        let _ = writeln!(out, "description: {}", product.description);
    }
    if !product.sizes.is_empty() {
        let _ = writeln!(out, "sizes:       {}", product.sizes.join(", "));
    }
    for color in &product.colors {
        let _ = writeln!(
            out,
            "color:       {} {} front={} back={}",
            color.name, color.hex_code, color.front_image, color.back_image
        );
    }
    for image in &product.extra_images {
        let _ = writeln!(out, "image:       {image}");
    }
    out
}
