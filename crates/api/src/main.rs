#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    visaconnect_config::configure!(api);

    visaconnect_api::web().await.launch().await?;
    Ok(())
}
