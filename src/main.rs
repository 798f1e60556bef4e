use rps_arena::app;

fn main() {
    env_logger::init();
    app::run();
}
