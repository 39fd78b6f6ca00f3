//! Message texts raised alongside cart actions.

/// Stand-in title when a removed product is not in the cart.
pub const UNKNOWN_ITEM: &str = "item";

/// A product was added.
pub fn added(title: &str) -> String {
    format!("Added \u{201c}{title}\u{201d} to your cart")
}

/// A product was removed, directly or by setting its quantity to zero.
pub fn removed(title: &str) -> String {
    format!("Removed \u{201c}{title}\u{201d} from your cart")
}

/// The cart was emptied.
pub fn cleared() -> String {
    "Your cart has been cleared".to_string()
}

/// Checkout has started.
pub fn checking_out() -> String {
    "Processing checkout...".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texts_mention_the_title() {
        assert!(added("Astronaut").contains("Astronaut"));
        assert!(removed(UNKNOWN_ITEM).contains("item"));
        assert_ne!(cleared(), checking_out());
    }
}
