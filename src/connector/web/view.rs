//! Server-side HTML for the consultation page.

use crate::domain::{ExpertCategory, StartupBanner, Submission, ViewState};

pub const PAGE_TITLE: &str = "LLM相談アプリ";
pub const HEADING: &str = "💬 LLM相談アプリ（キャリア／ワークライフバランス）";
pub const EXPERT_PROMPT: &str = "相談したい専門家の種類を選んでください：";
pub const CONTENT_LABEL: &str = "相談内容を入力してください（日本語OK）";
pub const SUBMIT_LABEL: &str = "LLMに相談する";
pub const ANSWER_HEADING: &str = "🔍 回答：";
const TEXTAREA_HEIGHT_PX: u32 = 200;

const DESCRIPTION: &str = r#"<h3>アプリの概要</h3>
<p>このアプリは、OpenAI の LLM（大規模言語モデル）を使った相談用アプリです。</p>
<ol>
  <li>相談したい「専門家のタイプ」をラジオボタンで選びます</li>
  <li>下の入力欄に相談内容を入力します</li>
  <li>「LLMに相談する」ボタンを押すと、専門家の視点でアドバイスが表示されます</li>
</ol>
<hr>
<p>※このアプリを利用するには、<code>.env</code> ファイルに <strong>OPENAI_API_KEY</strong> を設定しておく必要があります。</p>"#;

const STYLE: &str = r#"body{font-family:sans-serif;max-width:72rem;margin:2rem auto;padding:0 1rem}
.banner{padding:.75rem 1rem;border-radius:.5rem;margin:1rem 0;white-space:pre-wrap}
.success{background:#e6f4ea;color:#1e4620}
.error{background:#fdecea;color:#611a15}
.warning{background:#fff8e1;color:#663c00}
.experts label{margin-right:1.5rem}
textarea{width:100%;box-sizing:border-box}"#;

/// Escape text for use in HTML element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the full page: banner, form (re-filled with `submission`), and the
/// outcome for `state`.
pub fn render_page(banner: StartupBanner, submission: &Submission, state: &ViewState) -> String {
    let banner_class = if banner.is_error() { "error" } else { "success" };

    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<h1>{heading}</h1>
{description}
<div class="banner {banner_class}" id="startup-banner">{banner_message}</div>
<form method="post" action="/consult">
<fieldset class="experts">
<legend>{expert_prompt}</legend>
{radios}
</fieldset>
<p><label for="content">{content_label}</label></p>
<textarea id="content" name="content" style="height:{height}px">
{content}</textarea>
<p><button type="submit">{submit}</button></p>
</form>
{outcome}
</body>
</html>
"#,
        title = PAGE_TITLE,
        style = STYLE,
        heading = HEADING,
        description = DESCRIPTION,
        banner_class = banner_class,
        banner_message = escape_html(banner.message()),
        expert_prompt = EXPERT_PROMPT,
        radios = render_radios(&submission.expert),
        content_label = CONTENT_LABEL,
        height = TEXTAREA_HEIGHT_PX,
        content = escape_html(&submission.content),
        submit = SUBMIT_LABEL,
        outcome = render_outcome(state),
    )
}

fn render_radios(selected: &ExpertCategory) -> String {
    // An unrecognized submitted value re-selects the first option.
    let selected = if selected.is_recognized() {
        selected.clone()
    } else {
        ExpertCategory::default()
    };

    ExpertCategory::OPTIONS
        .iter()
        .map(|option| {
            let label = escape_html(option.label());
            let checked = if *option == selected { " checked" } else { "" };
            format!(r#"<label><input type="radio" name="expert" value="{label}"{checked}> {label}</label>"#)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_outcome(state: &ViewState) -> String {
    match state {
        ViewState::Idle => String::new(),
        ViewState::Answer { text } => format!(
            "<h3>{}</h3>\n<div class=\"banner success\" id=\"answer\">{}</div>",
            ANSWER_HEADING,
            escape_html(text)
        ),
        ViewState::ValidationWarning { message } => format!(
            "<div class=\"banner warning\" id=\"validation-warning\">{}</div>",
            escape_html(message)
        ),
        ViewState::ConfigurationError { message } | ViewState::Error { message } => format!(
            "<div class=\"banner error\" id=\"error\">{}</div>",
            escape_html(message)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EMPTY_INPUT_WARNING, MISSING_CREDENTIAL_MESSAGE};

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("改行\nそのまま"), "改行\nそのまま");
    }

    #[test]
    fn test_idle_page_has_form_controls() {
        let page = render_page(
            StartupBanner::Configured,
            &Submission::default(),
            &ViewState::Idle,
        );

        assert!(page.contains("<title>LLM相談アプリ</title>"));
        assert!(page.contains(r#"value="キャリアの専門家" checked"#));
        assert!(page.contains(r#"value="ワークライフバランスの専門家">"#));
        assert!(page.contains("LLMに相談する"));
        assert!(page.contains("height:200px"));
        assert!(page.contains("banner success"));
        assert!(!page.contains(ANSWER_HEADING));
    }

    #[test]
    fn test_missing_credential_banner() {
        let page = render_page(
            StartupBanner::MissingCredential,
            &Submission::default(),
            &ViewState::Idle,
        );
        assert!(page.contains("banner error"));
        assert!(page.contains(&escape_html(MISSING_CREDENTIAL_MESSAGE)));
    }

    #[test]
    fn test_answer_and_form_are_refilled() {
        let submission = Submission::new(ExpertCategory::WorkLifeBalance, "残業 <多い>");
        let page = render_page(
            StartupBanner::Configured,
            &submission,
            &ViewState::answer("早く寝ましょう"),
        );

        assert!(page.contains(ANSWER_HEADING));
        assert!(page.contains(">早く寝ましょう</div>"));
        assert!(page.contains("残業 &lt;多い&gt;</textarea>"));
        assert!(page.contains(r#"value="ワークライフバランスの専門家" checked"#));
    }

    #[test]
    fn test_validation_warning_rendered() {
        let page = render_page(
            StartupBanner::Configured,
            &Submission::default(),
            &ViewState::validation_warning(),
        );
        assert!(page.contains("banner warning"));
        assert!(page.contains(EMPTY_INPUT_WARNING));
    }

    #[test]
    fn test_leading_newline_survives_textarea_refill() {
        // Browsers strip one newline directly after the opening tag.
        let submission = Submission::new(ExpertCategory::Career, "\n二行目から書きました");
        let page = render_page(StartupBanner::Configured, &submission, &ViewState::Idle);

        assert!(page.contains("px\">\n\n二行目から書きました</textarea>"));
    }
}
