// main.rs
use std::process::ExitCode;

use webp_converter::app::{App, DesktopDialogs};

fn main() -> ExitCode {
    println!("Image to WebP Converter");
    println!("{}", "-".repeat(30));

    let app = App::default();
    let mut dialogs = DesktopDialogs;
    app.select_and_convert(&mut dialogs);

    ExitCode::SUCCESS
}
