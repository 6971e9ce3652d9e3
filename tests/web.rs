#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlButtonElement, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

const MARKUP: &str = r#"
  <div id="intro-overlay"><button id="intro-text">❤</button></div>
  <div id="falling-petals"></div>
  <div id="bg-hearts"></div>
  <canvas id="fireworks-canvas"></canvas>
  <main class="card">
    <div class="card-effects"></div>
    <div class="slideshow">
      <img class="avatar"><img class="avatar"><img class="avatar active">
    </div>
    <b id="d"></b><b id="h"></b><b id="m"></b><b id="s"></b>
    <button id="rsvpBtn">RSVP</button>
  </main>
"#;

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount() -> HtmlElement {
    let doc = document();
    let root: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();
    root.set_inner_html(MARKUP);
    doc.body().unwrap().append_child(&root).unwrap();
    root
}

fn el(id: &str) -> HtmlElement {
    document()
        .get_element_by_id(id)
        .expect("element not found")
        .dyn_into()
        .unwrap()
}

fn style(el: &HtmlElement, prop: &str) -> String {
    el.style().get_property_value(prop).unwrap()
}

fn count(selector: &str) -> u32 {
    document().query_selector_all(selector).unwrap().length()
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
async fn bypass_reveals_card_and_rsvp_cools_down() {
    let location = web_sys::window().unwrap().location();
    location.set_hash("skipIntro").unwrap();
    let root = mount();

    nenmatu_invite::boot().unwrap();

    let card = document().query_selector(".card").unwrap().unwrap().dyn_into().unwrap();
    assert_eq!(style(&card, "visibility"), "visible");
    assert_eq!(style(&el("intro-overlay"), "display"), "none");
    // The wedding date has passed: every field is clamped to zero.
    for id in ["d", "h", "m", "s"] {
        assert_eq!(el(id).text_content().unwrap(), "00");
    }
    assert_eq!(count("#bg-hearts .floating-heart"), 14);
    assert!(count(".card-effects .petal") >= 1);

    let button: HtmlButtonElement = el("rsvpBtn").dyn_into().unwrap();
    button.click();
    assert!(button.disabled());
    assert!(button.class_list().contains("active"));
    assert_eq!(count("body > div[style*='z-index: 4000']"), 1);
    // No timeline engine in the test page: confetti uses native animations.
    assert_eq!(count("body > div[style*='z-index: 3000']"), 32);

    sleep(2_700).await;
    assert!(!button.disabled());
    assert!(!button.class_list().contains("active"));
    assert_eq!(count("body > div[style*='z-index: 4000']"), 0);
    assert_eq!(count("body > div[style*='z-index: 3000']"), 0);

    root.remove();
    location.set_hash("").unwrap();
}

#[wasm_bindgen_test]
fn click_opens_card_without_timeline_engine() {
    let root = mount();
    nenmatu_invite::boot().unwrap();

    let card: HtmlElement = document().query_selector(".card").unwrap().unwrap().dyn_into().unwrap();
    assert_ne!(style(&card, "visibility"), "visible");
    assert_ne!(style(&el("intro-overlay"), "display"), "none");

    el("intro-text").click();
    assert_eq!(style(&card, "visibility"), "visible");
    assert_eq!(style(&el("intro-overlay"), "display"), "none");

    root.remove();
}

#[wasm_bindgen_test]
async fn slideshow_keeps_one_active_slide_from_any_markup() {
    let location = web_sys::window().unwrap().location();
    location.set_hash("skipIntro").unwrap();
    let root = mount();

    nenmatu_invite::boot().unwrap();

    let slides = document().query_selector_all(".slideshow .avatar").unwrap();
    let active = || {
        (0..slides.length())
            .filter_map(|i| slides.item(i))
            .map(|n| n.dyn_into::<HtmlElement>().unwrap())
            .map(|el| el.class_list().contains("active"))
            .collect::<Vec<_>>()
    };
    assert_eq!(active(), vec![true, false, false]);

    sleep(5_200).await;
    assert_eq!(active(), vec![false, true, false]);

    root.remove();
    location.set_hash("").unwrap();
}

#[wasm_bindgen_test]
fn query_token_is_matched_after_decoding() {
    use nenmatu_invite::url::bypass_requested;

    for href in [
        "https://invite.test/?skipIntro",
        "https://invite.test/?a=1&skip%49ntro=yes",
        "https://invite.test/?skipIntro=&b=2",
    ] {
        let url = web_sys::Url::new(href).unwrap();
        let params = url.search_params();
        assert!(bypass_requested(&url.hash(), "skipIntro", |k| params.has(k)), "{href}");
    }

    let url = web_sys::Url::new("https://invite.test/?x=skipIntro").unwrap();
    let params = url.search_params();
    assert!(!bypass_requested(&url.hash(), "skipIntro", |k| params.has(k)));
}
