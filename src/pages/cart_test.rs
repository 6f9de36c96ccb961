use super::*;

fn item(price: Option<f64>, currency: Option<&str>, quantity: u32) -> CartItem {
    CartItem {
        id: "c1".to_owned(),
        item_type: "car".to_owned(),
        name: "Corolla".to_owned(),
        quantity,
        price,
        currency: currency.map(str::to_owned),
        metadata: serde_json::Map::new(),
    }
}

#[test]
fn line_total_multiplies_price_by_quantity() {
    assert_eq!(line_total_label(&item(Some(1500.0), Some("NGN"), 3)).as_deref(), Some("4,500 NGN"));
}

#[test]
fn line_total_without_price_is_hidden() {
    assert_eq!(line_total_label(&item(None, Some("NGN"), 3)), None);
}

#[test]
fn subtotal_label_omits_missing_currency() {
    let total = CurrencyTotal { currency: None, amount: 1_234_567.0 };
    assert_eq!(subtotal_label(&total), "1,234,567");
}
