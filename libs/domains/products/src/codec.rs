//! JSON encoding of products and product lists.
//!
//! Decoding failures map to [`ProductError::Decode`] (a 400 at the HTTP
//! layer); encoding failures map to [`ProductError::Encode`] (a 500).

use std::io::{Read, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ProductError, ProductResult};
use crate::models::ProductInput;

/// Decodes one JSON value of type `T`.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> ProductResult<T> {
    serde_json::from_slice(bytes).map_err(|e| ProductError::Decode(e.to_string()))
}

/// Decodes a request body into a product payload.
///
/// An empty body or anything that is not a JSON object with the product
/// fields is a decode error. Unknown fields are ignored.
pub fn decode_product(bytes: &[u8]) -> ProductResult<ProductInput> {
    decode(bytes)
}

pub fn from_reader<R: Read>(reader: R) -> ProductResult<ProductInput> {
    serde_json::from_reader(reader).map_err(|e| ProductError::Decode(e.to_string()))
}

/// Encodes a product or a list of products.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> ProductResult<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| ProductError::Encode(e.to_string()))
}

pub fn to_writer<W: Write, T: Serialize + ?Sized>(writer: W, value: &T) -> ProductResult<()> {
    serde_json::to_writer(writer, value).map_err(|e| ProductError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;

    fn latte() -> Product {
        Product {
            id: 1,
            name: "Latte".to_string(),
            description: "Frothy milky coffee".to_string(),
            price: 2.45,
            sku: "abc-def-ghi".to_string(),
        }
    }

    #[test]
    fn test_product_round_trip() {
        let product = latte();
        let bytes = encode(&product).unwrap();
        let back: Product = decode(&bytes).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn test_list_encodes_as_array() {
        let bytes = encode(&[latte()][..]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value[0]["id"], 1);
        assert_eq!(value[0]["sku"], "abc-def-ghi");

        let empty: Vec<Product> = Vec::new();
        assert_eq!(encode(&empty).unwrap(), b"[]");
    }

    #[test]
    fn test_decode_product_rejects_garbage() {
        assert!(matches!(decode_product(b""), Err(ProductError::Decode(_))));
        assert!(matches!(
            decode_product(b"{\"name\": "),
            Err(ProductError::Decode(_))
        ));
        assert!(matches!(
            decode_product(br#"{"price": "cheap"}"#),
            Err(ProductError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_product_accepts_null_fields() {
        let input =
            decode_product(br#"{"name":"x","description":null,"price":1,"sku":"abc-def-ghi"}"#)
                .unwrap();
        assert_eq!(input.name, "x");
        assert!(input.description.is_empty());
        assert_eq!(input.price, 1.0);

        let input = decode_product(br#"{"name":null,"sku":null}"#).unwrap();
        assert_eq!(input, ProductInput::default());
    }

    #[test]
    fn test_from_reader_and_to_writer() {
        let input = from_reader(&br#"{"name":"Tea","price":1.5,"sku":"abc-def-ghi"}"#[..]).unwrap();
        assert_eq!(input.price, 1.5);

        let mut out = Vec::new();
        to_writer(&mut out, &Product::from_input(3, input)).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["name"], "Tea");
    }

    #[test]
    fn test_writer_failure_is_encode_error() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        assert!(matches!(
            to_writer(Closed, &latte()),
            Err(ProductError::Encode(_))
        ));
    }
}
