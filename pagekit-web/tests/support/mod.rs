use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

/// Resolve after `duration_ms` so animation frames can run.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn wait_ms(duration_ms: i32) {
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });
    let resolve = resolve_slot.expect("promise executor runs synchronously");
    let timer = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });
    web_sys::window()
        .expect("browser window")
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            timer.as_ref().unchecked_ref(),
            duration_ms,
        )
        .expect("timer scheduled");
    timer.forget();
    JsFuture::from(promise).await.expect("timer resolves");
}
