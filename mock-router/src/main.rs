use mock_router::RouteTable;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let table = match std::env::var("ROUTES") {
        Ok(path) => serde_json::from_slice::<RouteTable>(&std::fs::read(path)?)?,
        Err(_) => RouteTable::default(),
    };
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("listening on {addr} with {} routes", table.routes.len());
    mock_router::run(listener, table).await?;
    Ok(())
}
