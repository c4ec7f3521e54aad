//! Server-rendered marketing and waitlist pages.
//!
//! Pure rendering: every function maps state to markup. User-provided
//! values go through `escape_html`.

use crate::{
    application::helpers::html::escape_html,
    domain::entities::{
        waitlist_form::{SubmissionStatus, WaitlistForm},
        waitlist_submission::WaitlistField,
    },
};

const BRAND_NAME: &str = "VisaFriendly";

const FEATURES: [(&str, &str); 6] = [
    (
        "H-1B Focused Jobs",
        "Only companies that actively sponsor H-1B visas. No more wasting time on dead-end applications.",
    ),
    (
        "Verified Employers",
        "Pre-screened companies with proven H-1B sponsorship history and positive employee reviews.",
    ),
    (
        "Fast Applications",
        "Streamlined application process designed specifically for visa-requiring candidates.",
    ),
    (
        "Success Tracking",
        "Real-time updates on your application status and visa sponsorship progress.",
    ),
    (
        "Global Opportunities",
        "Access to remote and on-site positions across the United States from top tech companies.",
    ),
    (
        "Premium Support",
        "Dedicated support team that understands the unique challenges of H-1B job searching.",
    ),
];

const STATS: [(&str, &str); 3] = [
    ("50k+", "Companies Ready to Sponsor"),
    ("100k+", "H-1B Jobs Posted Monthly"),
    ("92%", "Success Rate"),
];

const WAITLIST_PERKS: [&str; 4] = [
    "Early access to our job board before public launch",
    "Exclusive job opportunities from H-1B sponsoring companies",
    "Updates on new features and improvements",
    "Priority customer support",
];

const NEXT_STEPS: [&str; 3] = [
    "We'll send you launch updates via email",
    "Get early access before public launch",
    "Exclusive job opportunities from day one",
];

const STYLES: &str = r#"
body{margin:0;font-family:system-ui,-apple-system,'Segoe UI',sans-serif;color:#111827;background:linear-gradient(135deg,#eff6ff,#eef2ff,#faf5ff);min-height:100vh}
a{color:inherit}
header{display:flex;justify-content:space-between;align-items:center;padding:24px 32px}
.brand{font-size:24px;font-weight:700;text-decoration:none}
.btn{display:inline-block;padding:12px 24px;border-radius:8px;background:#2563eb;color:#fff;text-decoration:none;font-weight:600;border:0;font-size:16px;cursor:pointer}
.btn[disabled]{opacity:.6;cursor:default}
.btn-outline{background:#fff;color:#111827;border:1px solid #d1d5db}
.container{max-width:960px;margin:0 auto;padding:32px 24px}
.narrow{max-width:640px}
.center{text-align:center}
.pill{display:inline-block;background:#dbeafe;color:#1e40af;font-size:14px;font-weight:500;padding:4px 12px;border-radius:999px}
.card{background:#fff;border-radius:16px;box-shadow:0 20px 40px rgba(0,0,0,.08);padding:32px}
.grid{display:grid;gap:24px;grid-template-columns:repeat(auto-fit,minmax(260px,1fr))}
.stats{display:grid;gap:24px;grid-template-columns:repeat(3,1fr);margin-top:48px}
.stat-number{font-size:30px;font-weight:700}
.muted{color:#4b5563}
.field{margin-bottom:20px}
.field label{display:block;font-weight:500;margin-bottom:6px}
.field input,.field textarea{width:100%;box-sizing:border-box;padding:10px 12px;border:1px solid #d1d5db;border-radius:8px;font-size:16px;font-family:inherit}
.field.invalid input{border-color:#ef4444}
.required{color:#ef4444}
.field-error{color:#dc2626;font-size:14px;margin:6px 0 0}
.alert{background:#fef2f2;border:1px solid #fecaca;color:#dc2626;border-radius:8px;padding:16px;margin-bottom:20px}
.info{background:#eff6ff;border-radius:8px;padding:16px;margin:20px 0}
footer{border-top:1px solid #e5e7eb;background:#fff;padding:32px;text-align:center;color:#4b5563}
"#;

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{styles}</style>
  </head>
  <body>
{body}
  </body>
</html>
"#,
        title = title,
        styles = STYLES,
        body = body,
    )
}

fn list_items(items: &[&str]) -> String {
    items.iter().map(|item| format!("<li>{item}</li>")).collect()
}

pub fn landing_page() -> String {
    let stats: String = STATS
        .iter()
        .map(|(number, label)| {
            format!(
                r#"<div class="center"><div class="stat-number">{number}</div><div class="muted">{label}</div></div>"#
            )
        })
        .collect();

    let features: String = FEATURES
        .iter()
        .map(|(title, description)| {
            format!(r#"<div class="card"><h3>{title}</h3><p class="muted">{description}</p></div>"#)
        })
        .collect();

    let body = format!(
        r#"<header>
  <a class="brand" href="/">{brand}</a>
  <a class="btn btn-outline" href="/waitlist">Join Waitlist</a>
</header>
<main>
  <section class="container center">
    <span class="pill">🚀 Launching Soon - Join 1,000+ Professionals</span>
    <h1>Your Gateway to <span style="color:#2563eb">H-1B Opportunities</span></h1>
    <p class="muted">The first job board exclusively for H-1B visa opportunities. Connect with employers who understand your journey and are ready to sponsor your success.</p>
    <a class="btn" href="/waitlist">Get Early Access →</a>
    <div class="stats">{stats}</div>
  </section>
  <section class="container">
    <div class="center">
      <h2>Why Choose {brand}?</h2>
      <p class="muted">We understand the unique challenges of H-1B job hunting. That's why we built a platform designed specifically for visa-requiring professionals.</p>
    </div>
    <div class="grid">{features}</div>
  </section>
</main>
<footer>© 2025 {brand}. Connecting talent with opportunity!</footer>"#,
        brand = BRAND_NAME,
        stats = stats,
        features = features,
    );

    layout(&format!("{BRAND_NAME} - H-1B Job Board"), &body)
}

struct InputSpec {
    field: WaitlistField,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    required: bool,
}

const INPUTS: [InputSpec; 3] = [
    InputSpec {
        field: WaitlistField::FullName,
        label: "Full Name",
        input_type: "text",
        placeholder: "Enter your full name",
        required: true,
    },
    InputSpec {
        field: WaitlistField::Email,
        label: "Email Address",
        input_type: "email",
        placeholder: "Enter your email address",
        required: true,
    },
    InputSpec {
        field: WaitlistField::JobTitle,
        label: "Preferred Job Title",
        input_type: "text",
        placeholder: "e.g., Software Engineer, Data Scientist, Product Manager",
        required: true,
    },
];

fn input_field(form: &WaitlistForm, spec: &InputSpec) -> String {
    let name = spec.field.as_str();
    let value = escape_html(form.fields.field(spec.field));
    let error = form.errors.get(spec.field);
    let class = if error.is_some() { "field invalid" } else { "field" };
    let marker = if spec.required {
        r#" <span class="required">*</span>"#
    } else {
        ""
    };
    let error_html = error
        .map(|msg| format!(r#"<p class="field-error">{}</p>"#, escape_html(msg)))
        .unwrap_or_default();

    format!(
        r#"<div class="{class}">
  <label for="{name}">{label}{marker}</label>
  <input type="{input_type}" id="{name}" name="{name}" value="{value}" placeholder="{placeholder}">
  {error_html}
</div>"#,
        class = class,
        name = name,
        label = spec.label,
        marker = marker,
        input_type = spec.input_type,
        value = value,
        placeholder = spec.placeholder,
        error_html = error_html,
    )
}

/// The form in the idle, submitting or error state.
pub fn waitlist_page(form: &WaitlistForm) -> String {
    let inputs: String = INPUTS.iter().map(|spec| input_field(form, spec)).collect();
    let message = escape_html(form.fields.field(WaitlistField::Message));
    let submit_error = form
        .submit_error()
        .map(|msg| format!(r#"<div class="alert" role="alert">{}</div>"#, escape_html(msg)))
        .unwrap_or_default();
    let (disabled, button_label) = match form.status {
        SubmissionStatus::Submitting => (" disabled", "Joining Waitlist..."),
        _ => ("", "Join the Waitlist"),
    };

    let body = format!(
        r#"<header>
  <a class="btn btn-outline" href="/">← Back to Home</a>
  <a class="brand" href="/">{brand}</a>
</header>
<main class="container narrow">
  <div class="center">
    <h1>Join the Waitlist</h1>
    <p class="muted">Be among the first to access exclusive H-1B job opportunities. We'll notify you the moment we launch!</p>
    <span class="pill">🎯 Join 1,000+ professionals already waiting</span>
  </div>
  <div class="card" style="margin-top:32px">
    <h2 class="center">Get Early Access</h2>
    <p class="center muted">Fill out the form below and we'll keep you updated on our progress.</p>
    <form method="post" action="/waitlist" onsubmit="var b=this.querySelector('button[type=submit]');b.disabled=true;b.textContent='Joining Waitlist...';">
      {inputs}
      <div class="field">
        <label for="message">Message (Optional)</label>
        <textarea id="message" name="message" rows="4" placeholder="Tell us about your experience, what you're looking for, or any questions you have...">{message}</textarea>
      </div>
      <div class="info">
        <strong>What you'll get:</strong>
        <ul class="muted">{perks}</ul>
      </div>
      {submit_error}
      <button class="btn" type="submit" style="width:100%"{disabled}>{button_label}</button>
    </form>
  </div>
  <p class="center muted">Trusted by professionals from top companies</p>
</main>"#,
        brand = BRAND_NAME,
        inputs = inputs,
        message = message,
        perks = list_items(&WAITLIST_PERKS),
        submit_error = submit_error,
        disabled = disabled,
        button_label = button_label,
    );

    layout(&format!("Join the Waitlist - {BRAND_NAME}"), &body)
}

/// Shown after a successful submission. "Submit Another" reloads an empty form.
pub fn thank_you_page() -> String {
    let body = format!(
        r#"<main class="container narrow">
  <div class="card center">
    <div style="font-size:48px">✅</div>
    <h1>Thank You!</h1>
    <p class="muted">You've successfully joined our H-1B job board waitlist. We'll notify you as soon as we launch!</p>
    <div class="info" style="text-align:left">
      <strong>What's Next?</strong>
      <ul>{next_steps}</ul>
    </div>
    <a class="btn btn-outline" href="/waitlist">Submit Another</a>
    <a class="btn" href="/">Back to Home</a>
  </div>
</main>"#,
        next_steps = list_items(&NEXT_STEPS),
    );

    layout(&format!("You're on the list - {BRAND_NAME}"), &body)
}
