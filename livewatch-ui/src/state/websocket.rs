//! WebSocket Client
//!
//! Drives the controller's push-channel hooks from `web_sys::WebSocket`
//! callbacks, and runs the heartbeat and auto-refresh timers.

use gloo_timers::callback::{Interval, Timeout};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, MessageEvent, WebSocket};

use livewatch::channel::HEARTBEAT;
use livewatch::ReconnectDecision;

use super::global::{Controller, GlobalState};

/// Reconnecting socket bound to the controller
pub struct PushSocket {
    url: String,
    controller: Controller,
    ws: RefCell<Option<WebSocket>>,
}

impl PushSocket {
    pub fn new(url: &str, controller: Controller) -> Rc<Self> {
        Rc::new(Self {
            url: url.to_string(),
            controller,
            ws: RefCell::new(None),
        })
    }

    /// Open a new socket; failures feed the reconnect policy
    pub fn connect(self: &Rc<Self>) {
        self.controller.channel_connecting();

        match WebSocket::new(&self.url) {
            Ok(ws) => {
                self.setup_handlers(&ws);
                *self.ws.borrow_mut() = Some(ws);
            }
            Err(e) => {
                // No close event follows a failed constructor
                self.controller
                    .channel_error(&format!("WebSocket connection failed: {:?}", e));
                self.on_closed();
            }
        }
    }

    fn setup_handlers(self: &Rc<Self>, ws: &WebSocket) {
        // On open
        let this = Rc::clone(self);
        let on_open = Closure::wrap(Box::new(move |_: JsValue| {
            web_sys::console::log_1(&"WebSocket connected".into());
            this.controller.channel_opened();
        }) as Box<dyn FnMut(JsValue)>);
        ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        on_open.forget();

        // On message
        let this = Rc::clone(self);
        let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
            if let Ok(text) = event.data().dyn_into::<js_sys::JsString>() {
                let text: String = text.into();
                let controller = Rc::clone(&this.controller);
                wasm_bindgen_futures::spawn_local(async move {
                    controller.handle_message(&text).await;
                });
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        on_message.forget();

        // On close
        let this = Rc::clone(self);
        let on_close = Closure::wrap(Box::new(move |event: CloseEvent| {
            web_sys::console::log_1(
                &format!("WebSocket closed: code={}, reason={}", event.code(), event.reason()).into(),
            );
            this.ws.borrow_mut().take();
            this.on_closed();
        }) as Box<dyn FnMut(CloseEvent)>);
        ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));
        on_close.forget();

        // On error
        let this = Rc::clone(self);
        let on_error = Closure::wrap(Box::new(move |e: JsValue| {
            web_sys::console::error_1(&format!("WebSocket error: {:?}", e).into());
            this.controller.channel_error("WebSocket error");
        }) as Box<dyn FnMut(JsValue)>);
        ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        on_error.forget();
    }

    fn on_closed(self: &Rc<Self>) {
        match self.controller.channel_closed() {
            ReconnectDecision::Retry { attempt, delay } => {
                let this = Rc::clone(self);
                Timeout::new(delay.as_millis() as u32, move || {
                    web_sys::console::log_1(
                        &format!("Attempting reconnect (attempt {})", attempt).into(),
                    );
                    this.connect();
                })
                .forget();
            }
            ReconnectDecision::GiveUp { attempts } => {
                web_sys::console::error_1(
                    &format!("Max reconnect attempts reached ({})", attempts).into(),
                );
            }
        }
    }

    /// Send the heartbeat frame if the channel is open
    pub fn heartbeat(&self) {
        if !self.controller.is_channel_open() {
            return;
        }
        if let Some(ws) = self.ws.borrow().as_ref() {
            if let Err(e) = ws.send_with_str(HEARTBEAT) {
                web_sys::console::error_1(&format!("Heartbeat failed: {:?}", e).into());
            }
        }
    }
}

/// Connect the push channel and start the heartbeat and auto-refresh timers
/// (call once from the app root)
pub fn init_websocket(state: &GlobalState, api_base: &str) {
    let url = livewatch::api::push_channel_url(api_base);
    let socket = PushSocket::new(&url, Rc::clone(&state.controller));
    socket.connect();

    let settings = *state.controller.settings();

    let heartbeat_socket = Rc::clone(&socket);
    Interval::new(settings.heartbeat_interval.as_millis() as u32, move || {
        heartbeat_socket.heartbeat();
    })
    .forget();

    let refresh_state = state.clone();
    Interval::new(settings.refresh_interval.as_millis() as u32, move || {
        refresh_state.spawn(|controller| async move { controller.auto_refresh().await });
    })
    .forget();
}
