use crate::domain::cart::CartEntry;

/// Parses a command-line cart line of the form `productId:quantity[:member|:non-member]`.
///
/// Without a mode suffix the non-member price applies. Meant for use as a clap
/// `value_parser`.
pub fn parse_cart_entry(arg: &str) -> Result<CartEntry, String> {
    let mut parts = arg.split(':');

    let product_id = parts
        .next()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| format!("missing product id in '{arg}'"))?;

    let quantity: u32 = parts
        .next()
        .ok_or_else(|| format!("missing quantity in '{arg}'"))?
        .trim()
        .parse()
        .map_err(|e| format!("invalid quantity in '{arg}': {e}"))?;
    if quantity == 0 {
        return Err(format!("quantity must be at least 1 in '{arg}'"));
    }

    let is_member_price = match parts.next().map(str::trim) {
        None | Some("non-member") => false,
        Some("member") => true,
        Some(other) => return Err(format!("unknown pricing mode '{other}' in '{arg}'")),
    };

    if parts.next().is_some() {
        return Err(format!("too many fields in '{arg}'"));
    }

    Ok(CartEntry::new(product_id, quantity, is_member_price))
}
