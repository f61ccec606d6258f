use pizza_dispatch::app;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    app::run()
}
