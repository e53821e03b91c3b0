use std::env;

fn main() {
    let api_url = env::var("PLAYERS_API_URL")
        .unwrap_or_else(|_| String::from("https://api.balldontlie.io"));

    println!("cargo:rerun-if-env-changed=PLAYERS_API_URL");
    println!("cargo:rustc-env=PLAYERS_API_URL={}", api_url);
}
