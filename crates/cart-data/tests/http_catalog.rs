//! HttpCatalog against a canned local HTTP server.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use cart_core::catalog::{Catalog, CatalogSource, LoadState, StockLookup};
use cart_core::{CartError, ProductId};
use cart_data::{FetchClient, FetchError, HttpCatalog};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const PRODUCTS: &str = r#"[
    {"id": 1, "title": "Tênis de Caminhada Leve Confortável", "price": 179.9, "image": "https://cdn.test/1.jpg"},
    {"id": 2, "title": "Tênis VR Caminhada Confortável", "price": 139.9, "image": "https://cdn.test/2.jpg"}
]"#;

const STOCK: &str = r#"[{"id": 1, "amount": 3}, {"id": 2, "amount": 5}]"#;

/// Serve `routes` (path -> (status, body)) until the test ends.
async fn serve(routes: HashMap<&'static str, (u16, &'static str)>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let routes = routes.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                let mut read = 0;
                while !buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf[read..]).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => read += n,
                    }
                }

                let request = String::from_utf8_lossy(&buf[..read]);
                let path = request.split_whitespace().nth(1).unwrap_or("/");
                let (status, body) = routes.get(path).copied().unwrap_or((404, "Not Found"));
                let response = format!(
                    "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

fn base(addr: SocketAddr) -> String {
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_fetches_products_and_stock() {
    let addr = serve(HashMap::from([
        ("/products", (200, PRODUCTS)),
        ("/stock", (200, STOCK)),
    ]))
    .await;
    let source = HttpCatalog::new(base(addr)).unwrap();

    let products = source.fetch_products().await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, ProductId::new(1));
    assert_eq!(products[1].price, 139.9);

    let stock = source.fetch_stock().await.unwrap();
    assert_eq!(stock[1].amount, 5);
}

#[tokio::test]
async fn test_catalog_load_is_ready() {
    let addr = serve(HashMap::from([
        ("/products", (200, PRODUCTS)),
        ("/stock", (200, STOCK)),
    ]))
    .await;
    let source = HttpCatalog::new(base(addr)).unwrap();

    let catalog = Catalog::load(&source).await;

    assert!(catalog.is_ready());
    assert!(matches!(
        catalog.stock_for(ProductId::new(1)),
        StockLookup::Found(stock) if stock.amount == 3
    ));
}

#[tokio::test]
async fn test_failed_stock_leaves_products_loaded() {
    let addr = serve(HashMap::from([
        ("/products", (200, PRODUCTS)),
        ("/stock", (500, "boom")),
    ]))
    .await;
    let source = HttpCatalog::new(base(addr)).unwrap();

    let err = source.fetch_stock().await.unwrap_err();
    assert!(matches!(err, CartError::CatalogLoad(ref msg) if msg.contains("500")));

    let catalog = Catalog::load(&source).await;
    assert!(catalog.products().is_loaded());
    assert!(matches!(catalog.stock(), LoadState::Failed(_)));
    assert_eq!(catalog.stock_for(ProductId::new(1)), StockLookup::Unavailable);
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let addr = serve(HashMap::from([("/stock", (200, "<html></html>"))])).await;
    let client = FetchClient::new().unwrap().with_base_url(base(addr));

    let result: Result<Vec<cart_core::catalog::Stock>, _> = client.get_json("/stock").await;
    assert!(matches!(result, Err(FetchError::ParseError(_))));
}

#[tokio::test]
async fn test_unreachable_server() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = HttpCatalog::with_timeout(base(addr), Duration::from_secs(2)).unwrap();
    assert!(matches!(
        source.fetch_products().await,
        Err(CartError::CatalogLoad(_))
    ));
}
