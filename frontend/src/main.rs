//! Entry point for the WASM application

pub fn main() {
    retina_risk::start();
}
