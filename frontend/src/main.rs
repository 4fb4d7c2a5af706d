fn main() {
    if let Err(e) = renalflow::run() {
        gloo_console::error!(format!("RenalFlow failed to start: {}", e));
    }
}
