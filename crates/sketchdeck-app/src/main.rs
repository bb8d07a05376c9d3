//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    use sketchdeck_core::{ClipboardStore, EditorConfig, FileClipboard, MemoryClipboard};

    env_logger::init();
    log::info!("Starting SketchDeck");

    let config = EditorConfig::load();

    // `--file-clipboard` shares copies between sessions without the system clipboard
    let clipboard: Box<dyn ClipboardStore> = if std::env::args().any(|a| a == "--file-clipboard") {
        match FileClipboard::default_location() {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::error!("{}, falling back to memory clipboard", e);
                Box::new(MemoryClipboard::new())
            }
        }
    } else {
        Box::new(sketchdeck_app::SystemClipboard::new())
    };

    let mut app = sketchdeck_app::App::new(config, clipboard);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(e) = app.run(stdin.lock(), stdout.lock()) {
        log::error!("Console error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
