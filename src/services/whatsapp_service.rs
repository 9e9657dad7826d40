use rust_decimal::Decimal;

/// Build the `wa.me` deep link for ordering a product. The configured phone
/// may carry a leading `+`, spaces or dashes; wa.me wants digits only. The
/// message body is the configured greeting plus the order summary, percent
/// encoded.
pub fn build_order_link(
    phone_number: &str,
    default_message: &str,
    product_name: &str,
    description: Option<&str>,
    price: Decimal,
    color_name: Option<&str>,
) -> String {
    let digits: String = phone_number
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();

    let greeting = if default_message.trim().is_empty() {
        "Hola! Estoy interesado en el producto:"
    } else {
        default_message.trim()
    };

    let message = format!(
        "{}\nNombre: {}\nDescripción: {}\nPrecio: ${}\nColor seleccionado: {}",
        greeting,
        product_name,
        description.unwrap_or("Sin descripción"),
        price,
        color_name.unwrap_or("Original"),
    );

    format!(
        "https://wa.me/{}?text={}",
        digits,
        urlencoding::encode(&message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_is_digits_only() {
        let url = build_order_link(
            "+52 1 555-123-4567",
            "",
            "Lentes",
            None,
            Decimal::new(100, 0),
            None,
        );
        assert!(url.starts_with("https://wa.me/5215551234567?text="));
    }

    #[test]
    fn test_message_is_percent_encoded() {
        let url = build_order_link(
            "5215551234567",
            "Hola, quiero pedir:",
            "Lentes de sol",
            Some("Montura ligera"),
            Decimal::new(49999, 2),
            Some("Rojo"),
        );

        let (_, text) = url.split_once("?text=").unwrap();
        assert!(!text.contains(' '));
        assert!(!text.contains('\n'));
        assert!(text.contains("Lentes%20de%20sol"));
        assert!(text.contains("499.99"));
        assert!(text.contains("Rojo"));
    }

    #[test]
    fn test_color_defaults_to_original() {
        let url = build_order_link("1", "", "X", None, Decimal::ZERO, None);
        assert!(url.contains("Original"));
    }

    #[test]
    fn test_missing_description_uses_placeholder() {
        let url = build_order_link("1", "", "X", None, Decimal::ZERO, None);
        let decoded = urlencoding::decode(url.split_once("?text=").unwrap().1)
            .unwrap()
            .into_owned();
        assert!(decoded.contains("Sin descripción"));
    }
}
