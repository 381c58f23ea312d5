fn main() {
    let password = std::env::args()
        .nth(1)
        .expect("Usage: hash_password <password>");
    let hash = swyft_server::auth::hash_password(&password).expect("Failed to hash password");
    println!("{hash}");
}
