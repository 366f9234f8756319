use yew::prelude::*;
use yew_hooks::use_window_size;

use crate::config::{
    BAG_POLICY_IMAGE, GOOGLE_VIEWER_BASE, POLICY_DOCUMENT_DOWNLOAD_NAME, POLICY_DOCUMENT_PATH,
};
use crate::content::{
    ALLOWED_ITEMS, AMPHITHEATER_RESTRICTIONS, CARRY_IN_NOTICE, MEDICAL_ITEMS,
    PROHIBITED_DISCLAIMER, PROHIBITED_ITEMS, SECURITY_SCREENING, SECURITY_SCREENING_INTRO,
};
use crate::dom;

const VIEWER_MAX_WIDTH: f64 = 800.0;
const VIEWER_GUTTER: f64 = 80.0;

/// Document frame size for a window of the given inner width: at most 800px
/// wide with an 80px gutter, 4:3.
pub fn viewer_dimensions(window_width: f64) -> (u32, u32) {
    let width = (window_width - VIEWER_GUTTER).clamp(0.0, VIEWER_MAX_WIDTH);
    (width.round() as u32, (width * 0.75).round() as u32)
}

pub fn document_url(origin: Option<&str>) -> String {
    match origin {
        Some(origin) => format!("{}{}", origin.trim_end_matches('/'), POLICY_DOCUMENT_PATH),
        None => POLICY_DOCUMENT_PATH.to_string(),
    }
}

pub fn google_viewer_url(document_url: &str) -> String {
    format!(
        "{}?url={}&embedded=true",
        GOOGLE_VIEWER_BASE,
        urlencoding::encode(document_url)
    )
}

fn bullet_list(items: &[&'static str]) -> Html {
    html! {
        <ul>
            { for items.iter().map(|item| html! { <li key={*item}>{*item}</li> }) }
        </ul>
    }
}

#[function_component(Policies)]
pub fn policies() -> Html {
    let use_google_viewer = use_state(|| false);
    let (window_width, _) = use_window_size();
    let (frame_width, frame_height) = viewer_dimensions(window_width);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            dom::reset_scroll();
            || ()
        },
        (),
    );

    let toggle_viewer = {
        let use_google_viewer = use_google_viewer.clone();
        Callback::from(move |_: MouseEvent| use_google_viewer.set(!*use_google_viewer))
    };

    let viewer = if *use_google_viewer {
        let src = google_viewer_url(&document_url(dom::page_origin().as_deref()));
        html! {
            <iframe
                src={src}
                width={frame_width.to_string()}
                height={frame_height.to_string()}
                title="Service Animals Policy PDF - Google Viewer"
            ></iframe>
        }
    } else {
        // The <object> falls back to an <iframe>, which falls back to a download link
        html! {
            <object
                data={POLICY_DOCUMENT_PATH}
                type="application/pdf"
                width={frame_width.to_string()}
                height={frame_height.to_string()}
            >
                <iframe
                    src={POLICY_DOCUMENT_PATH}
                    width={frame_width.to_string()}
                    height={frame_height.to_string()}
                    title="Service Animals Policy PDF"
                >
                    <p>
                        {"Your browser doesn't support PDF viewing. "}
                        <a href={POLICY_DOCUMENT_PATH} download={POLICY_DOCUMENT_DOWNLOAD_NAME}>
                            {"Download the PDF"}
                        </a>
                        {" instead."}
                    </p>
                </iframe>
            </object>
        }
    };

    html! {
        <div class="policies-page">
            <div class="policies-container">
                <div class="policies-heading">
                    <h1>{"Festival Policies"}</h1>
                    <p>{"Please see the 2025 Summerfest Grounds policies for carry ins, prohibited items, permitted items, and service animals."}</p>
                </div>

                <div class="policy-card notice">
                    <p>{CARRY_IN_NOTICE}</p>
                </div>

                <div class="policy-image">
                    <img src={BAG_POLICY_IMAGE} alt="Henry Maier Festival Park Bag Policy" />
                </div>

                <div class="policy-card">
                    <h3>{"🛡️ Security Screening"}</h3>
                    <p>{SECURITY_SCREENING_INTRO}</p>
                    { bullet_list(&SECURITY_SCREENING) }
                </div>

                <div class="policy-columns">
                    <div class="policy-card allowed">
                        <h3><span class="badge badge-allowed">{"ALLOWED"}</span></h3>
                        { bullet_list(&ALLOWED_ITEMS) }
                    </div>
                    <div class="policy-card prohibited">
                        <h3><span class="badge badge-prohibited">{"NOT ALLOWED"}</span></h3>
                        { bullet_list(&PROHIBITED_ITEMS) }
                        <p class="disclaimer">{PROHIBITED_DISCLAIMER}</p>
                    </div>
                </div>

                <div class="policy-card">
                    <h3>{"Medical Items & Personal Care"}</h3>
                    <p>{"If you need to bring medication, medical equipment, diapers, or other personal care items to Summerfest, how should you pack those items?"}</p>
                    { bullet_list(&MEDICAL_ITEMS) }
                </div>

                <div class="policy-card">
                    <h3>{"American Family Insurance Amphitheater - Additional Restrictions"}</h3>
                    <p>{"The following additional items are NOT PERMITTED in the American Family Insurance Amphitheater:"}</p>
                    { bullet_list(&AMPHITHEATER_RESTRICTIONS) }
                </div>

                <div class="policy-card">
                    <h3>{"Service Animals Policy"}</h3>
                    <p>{"Milwaukee World Festival, Inc. welcomes guests with disabilities and their service animals. Please review our complete service animals policy document below."}</p>
                    <div class="document-viewer">
                        <div class="document-toolbar">
                            <h4>{"📄 Service Animals Policy Document"}</h4>
                            <button class="viewer-toggle" onclick={toggle_viewer}>
                                { if *use_google_viewer { "Use native viewer" } else { "Use Google viewer" } }
                            </button>
                        </div>
                        <div class="document-frame">{viewer}</div>
                        <div class="document-links">
                            <a href={POLICY_DOCUMENT_PATH} target="_blank" rel="noopener noreferrer">
                                {"📄 Open PDF in new tab"}
                            </a>
                            <a href={POLICY_DOCUMENT_PATH} download={POLICY_DOCUMENT_DOWNLOAD_NAME}>
                                {"⬇️ Download PDF"}
                            </a>
                        </div>
                        <p class="document-hint">{"If you have trouble viewing the document, please use one of the options above."}</p>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .policies-page {
                    padding: 8rem 1rem 5rem 1rem;
                    background: linear-gradient(to bottom right, #fff7ed, #fdf2f8);
                    min-height: 100vh;
                }
                .policies-container {
                    max-width: 64rem;
                    margin: 0 auto;
                }
                .policies-heading {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .policies-heading h1 {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 800;
                    background: linear-gradient(90deg, #f97316, #ec4899);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    margin: 0 0 1rem 0;
                }
                .policies-heading p {
                    font-size: 1.25rem;
                    color: #4b5563;
                }
                .policy-card {
                    background: #fff;
                    border-radius: 1rem;
                    padding: 2rem;
                    margin-bottom: 2rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.06);
                }
                .policy-card h3 {
                    font-size: 1.5rem;
                    margin: 0 0 1rem 0;
                }
                .policy-card p,
                .policy-card li {
                    color: #374151;
                    line-height: 1.6;
                }
                .policy-card ul {
                    padding-left: 1.25rem;
                }
                .policy-card.notice {
                    border-left: 4px solid #f97316;
                }
                .policy-image {
                    margin-bottom: 2rem;
                    text-align: center;
                }
                .policy-image img {
                    border-radius: 1rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .policy-columns {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                    gap: 2rem;
                }
                .badge {
                    display: inline-block;
                    padding: 0.25rem 1rem;
                    border-radius: 9999px;
                    color: #fff;
                    font-size: 1rem;
                }
                .badge-allowed {
                    background: #16a34a;
                }
                .badge-prohibited {
                    background: #dc2626;
                }
                .disclaimer {
                    font-size: 0.875rem;
                    font-style: italic;
                }
                .document-viewer {
                    border: 1px solid #e5e7eb;
                    border-radius: 0.75rem;
                    padding: 1rem;
                    margin-top: 1.5rem;
                }
                .document-toolbar {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                }
                .document-toolbar h4 {
                    margin: 0;
                }
                .viewer-toggle {
                    background: #f3f4f6;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 0.5rem 1rem;
                    cursor: pointer;
                }
                .document-frame {
                    display: flex;
                    justify-content: center;
                    margin: 1rem 0;
                    overflow: hidden;
                }
                .document-frame iframe,
                .document-frame object {
                    border: 0;
                    border-radius: 0.5rem;
                }
                .document-links {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                }
                .document-links a {
                    background: linear-gradient(90deg, #f97316, #ec4899);
                    color: #fff;
                    text-decoration: none;
                    padding: 0.6rem 1.25rem;
                    border-radius: 9999px;
                    font-weight: 600;
                }
                .document-hint {
                    text-align: center;
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_is_capped_at_800_wide() {
        assert_eq!(viewer_dimensions(1920.0), (800, 600));
        assert_eq!(viewer_dimensions(880.0), (800, 600));
    }

    #[test]
    fn viewer_keeps_gutter_on_narrow_windows() {
        assert_eq!(viewer_dimensions(480.0), (400, 300));
        assert_eq!(viewer_dimensions(375.0), (295, 221));
    }

    #[test]
    fn viewer_never_goes_negative() {
        assert_eq!(viewer_dimensions(40.0), (0, 0));
        assert_eq!(viewer_dimensions(0.0), (0, 0));
    }

    #[test]
    fn document_url_uses_origin_when_known() {
        assert_eq!(
            document_url(Some("https://festival.example/")),
            "https://festival.example/service-animals_2025.pdf"
        );
        assert_eq!(document_url(None), "/service-animals_2025.pdf");
    }

    #[test]
    fn google_viewer_url_encodes_the_document() {
        let url = google_viewer_url("https://festival.example/service-animals_2025.pdf");
        assert_eq!(
            url,
            "https://docs.google.com/viewer?url=https%3A%2F%2Ffestival.example%2Fservice-animals_2025.pdf&embedded=true"
        );
    }
}
