//! Published-sheet catalog backend.
//!
//! Fetches a published CSV export (one row per product, header
//! `id,nombre,precio,stock,imagen`; English column names are accepted as
//! aliases) and parses it into products. Any row missing a required
//! field fails the whole load.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;
use url::Url;

use mercadito_core::{Product, ProductId};

use super::DataSourceError;

/// One data row of the published export.
///
/// `precio` stays a string until validation so an empty cell is reported
/// as a missing field rather than a serde type error.
#[derive(Debug, Deserialize)]
struct SheetRow {
    id: String,
    #[serde(alias = "name")]
    nombre: String,
    #[serde(alias = "price")]
    precio: String,
    #[serde(default)]
    stock: Option<u32>,
    #[serde(default, alias = "image")]
    imagen: Option<String>,
}

/// Fetch the published export and parse it into products.
#[instrument(skip(client))]
pub async fn fetch(
    client: &reqwest::Client,
    url: &Url,
    timeout: Duration,
) -> Result<Vec<Product>, DataSourceError> {
    let body = client
        .get(url.clone())
        .timeout(timeout)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    parse(&body)
}

/// Parse CSV text into products, failing fast on the first bad row.
pub fn parse(data: &str) -> Result<Vec<Product>, DataSourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes());

    let mut products = Vec::new();
    for (index, record) in reader.deserialize::<SheetRow>().enumerate() {
        // 1-based data row number, header excluded
        let row = index + 1;
        products.push(validate_row(row, record?)?);
    }
    Ok(products)
}

fn validate_row(row: usize, record: SheetRow) -> Result<Product, DataSourceError> {
    if record.id.is_empty() {
        return Err(DataSourceError::MissingField { row, field: "id" });
    }
    if record.nombre.is_empty() {
        return Err(DataSourceError::MissingField {
            row,
            field: "nombre",
        });
    }
    if record.precio.is_empty() {
        return Err(DataSourceError::MissingField {
            row,
            field: "precio",
        });
    }

    let price = record
        .precio
        .parse::<Decimal>()
        .ok()
        .filter(|p| !p.is_sign_negative())
        .ok_or_else(|| DataSourceError::InvalidPrice {
            row,
            value: record.precio.clone(),
        })?;

    Ok(Product {
        id: ProductId::new(record.id),
        name: record.nombre,
        price,
        stock: record.stock.unwrap_or(0),
        image: record.imagen.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "\
id,nombre,precio,stock,imagen
p1,Café de Especialidad,250.00,15,https://example.com/cafe.jpg
p2,Taza de Cerámica,120.00,0,https://example.com/taza.jpg
";

    #[test]
    fn test_parse_well_formed_export() {
        let products = parse(GOOD).expect("well-formed export");
        assert_eq!(products.len(), 2);

        let first = products.first().expect("two products");
        assert_eq!(first.id.as_str(), "p1");
        assert_eq!(first.name, "Café de Especialidad");
        assert_eq!(first.price, Decimal::new(25000, 2));
        assert_eq!(first.stock, 15);

        let second = products.get(1).expect("two products");
        assert!(!second.in_stock());
    }

    #[test]
    fn test_parse_preserves_row_order() {
        let products = parse(GOOD).expect("well-formed export");
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[test]
    fn test_parse_accepts_english_headers() {
        let data = "id,name,price,stock,image\np1,Specialty Coffee,250.00,15,img\n";
        let products = parse(data).expect("aliased headers");
        assert_eq!(products.first().map(|p| p.name.as_str()), Some("Specialty Coffee"));
    }

    #[test]
    fn test_parse_header_only_export_is_empty() {
        let products = parse("id,nombre,precio,stock,imagen\n").expect("empty export");
        assert!(products.is_empty());
    }

    #[test]
    fn test_missing_price_column_is_fatal() {
        let data = "id,nombre,stock,imagen\np1,Café,15,img\n";
        assert!(matches!(parse(data), Err(DataSourceError::Csv(_))));
    }

    #[test]
    fn test_empty_id_cell_is_fatal() {
        let data = "id,nombre,precio,stock,imagen\n,Café,250.00,15,img\n";
        assert!(matches!(
            parse(data),
            Err(DataSourceError::MissingField { row: 1, field: "id" })
        ));
    }

    #[test]
    fn test_empty_price_cell_is_fatal() {
        let data = "\
id,nombre,precio,stock,imagen
p1,Café,250.00,15,img
p2,Taza,,0,img
";
        assert!(matches!(
            parse(data),
            Err(DataSourceError::MissingField {
                row: 2,
                field: "precio"
            })
        ));
    }

    #[test]
    fn test_negative_price_is_fatal() {
        let data = "id,nombre,precio,stock,imagen\np1,Café,-1.00,15,img\n";
        assert!(matches!(
            parse(data),
            Err(DataSourceError::InvalidPrice { row: 1, .. })
        ));
    }

    #[test]
    fn test_unparseable_price_is_fatal() {
        let data = "id,nombre,precio,stock,imagen\np1,Café,gratis,15,img\n";
        assert!(matches!(
            parse(data),
            Err(DataSourceError::InvalidPrice { row: 1, .. })
        ));
    }

    #[test]
    fn test_missing_stock_defaults_to_sold_out() {
        let data = "id,nombre,precio,stock,imagen\np1,Café,250.00,,img\n";
        let products = parse(data).expect("optional stock");
        assert_eq!(products.first().map(|p| p.stock), Some(0));
    }

    #[test]
    fn test_quoted_name_with_comma() {
        let data = "id,nombre,precio,stock,imagen\np1,\"Café, tueste medio\",250.00,15,img\n";
        let products = parse(data).expect("quoted field");
        assert_eq!(
            products.first().map(|p| p.name.as_str()),
            Some("Café, tueste medio")
        );
    }
}
