fn main() {
    agriconnect_web::run();
}
