use postbox_derive::postbox_error;

#[postbox_error]
pub struct DemoError {
    message: String,
}

fn main() {}
