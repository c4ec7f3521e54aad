use url::Url;

use crate::application::helpers::html::escape_html;

const BRAND_NAME: &str = "VisaFriendly";
const CONFIRMATION_SUBJECT: &str = "🎉 You're On the List! Here's What's Next";
const COPYRIGHT_LINE: &str =
    "© 2024 VisaFriendly Team. Helping dreams become reality, with no visa barriers.";

const HIGHLIGHTS: [(&str, &str); 4] = [
    (
        "Verified Visa Sponsorship",
        "No more wasted time. Find jobs, internships, and co-ops at companies that actually sponsor H-1B and Green Cards.",
    ),
    (
        "Personalized Job Matches",
        "Get roles tailored to your visa status, experience, and career goals.",
    ),
    (
        "Faster, Smarter Applications",
        "Save jobs, track applications, and follow up, all in one place.",
    ),
    (
        "Real Insights for F-1 and H-1B Holders",
        "Resources, checklists, and hiring trends designed just for you.",
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationEmail {
    pub subject: String,
    pub text: String,
    pub html: String,
}

pub fn primary_button(url: &str, label: &str) -> String {
    format!(
        r#"<a href="{url}" style="display:inline-block;padding:16px 32px;background:linear-gradient(135deg,#3b82f6 0%,#1d4ed8 100%);color:#ffffff;text-decoration:none;border-radius:8px;font-weight:600;font-size:16px;">{label}</a>"#
    )
}

fn highlight_items() -> String {
    HIGHLIGHTS
        .iter()
        .map(|(title, detail)| {
            format!(
                r#"<li style="margin-bottom:12px;"><strong style="color:#1e40af;">✅ {title}</strong><br><span style="color:#6b7280;font-size:14px;">{detail}</span></li>"#
            )
        })
        .collect()
}

/// Waitlist confirmation sent by the email-send endpoint.
/// The recipient name is escaped before it reaches the HTML body.
pub fn confirmation_email(full_name: &str, site_url: &Url) -> ConfirmationEmail {
    let text = format!("Hi {full_name}, thanks for signing up for {BRAND_NAME}!");
    let name = escape_html(full_name);
    let button = primary_button(site_url.as_str(), &format!("Visit {BRAND_NAME} →"));

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Waitlist Confirmation - {brand}</title>
  </head>
  <body style="margin:0;padding:0;font-family:'Segoe UI',Tahoma,Geneva,Verdana,sans-serif;background-color:#f0f4f8;">
    <table role="presentation" cellspacing="0" cellpadding="0" border="0" width="100%" style="background-color:#f0f4f8;">
      <tr>
        <td align="center" style="padding:20px 10px;">
          <table role="presentation" cellspacing="0" cellpadding="0" border="0" width="600" style="max-width:600px;background-color:#ffffff;border-radius:16px;overflow:hidden;">
            <tr>
              <td style="background:linear-gradient(135deg,#3b82f6 0%,#1d4ed8 100%);padding:40px 30px;text-align:center;">
                <h1 style="margin:0;color:#ffffff;font-size:28px;font-weight:700;">🎯 You're on the List!</h1>
                <p style="margin:10px 0 0 0;color:#dbeafe;font-size:16px;">Early access to your visa-sponsored career awaits</p>
              </td>
            </tr>
            <tr>
              <td style="padding:40px 30px;">
                <h2 style="margin:0 0 20px 0;color:#1e40af;font-size:24px;font-weight:600;">Hi {name}! 👋</h2>
                <p style="margin:0 0 25px 0;color:#374151;font-size:16px;line-height:1.6;"><strong>Thank you for joining the {brand} Early Access Waitlist!</strong></p>
                <p style="margin:0 0 25px 0;color:#374151;font-size:16px;line-height:1.6;">We're excited to help you unlock your U.S. career opportunities with zero visa guesswork. 🌟</p>
                <div style="background-color:#eff6ff;border-left:4px solid #3b82f6;padding:20px;margin:25px 0;border-radius:0 8px 8px 0;">
                  <h3 style="margin:0 0 15px 0;color:#1e40af;font-size:18px;font-weight:600;">Here's what makes {brand} different:</h3>
                  <ul style="margin:0;padding-left:20px;color:#374151;font-size:15px;line-height:1.7;">{highlights}</ul>
                </div>
                <div style="background-color:#fef3c7;border-left:4px solid #f59e0b;padding:20px;margin:25px 0;border-radius:0 8px 8px 0;">
                  <h3 style="margin:0 0 15px 0;color:#92400e;font-size:18px;font-weight:600;">👀 What's Next?</h3>
                  <p style="margin:0;color:#78350f;font-size:15px;line-height:1.6;">We'll email you as soon as your early access is ready. Until then, stay tuned and get ready to land your visa-sponsored dream job faster.</p>
                </div>
                <p style="margin:25px 0;color:#374151;font-size:16px;line-height:1.6;">Thank you for being part of our growing community. We're building {brand} for you and we can't wait to support your journey!</p>
                <div style="text-align:center;margin:35px 0;">{button}</div>
              </td>
            </tr>
            <tr>
              <td style="background-color:#f8fafc;padding:30px;text-align:center;border-top:1px solid #e2e8f0;">
                <p style="margin:0 0 10px 0;color:#64748b;font-size:14px;">Questions? Reply to this email</p>
                <p style="margin:0;color:#94a3b8;font-size:13px;">{copyright}</p>
              </td>
            </tr>
          </table>
        </td>
      </tr>
    </table>
  </body>
</html>
"#,
        brand = BRAND_NAME,
        name = name,
        highlights = highlight_items(),
        button = button,
        copyright = COPYRIGHT_LINE,
    );

    ConfirmationEmail {
        subject: CONFIRMATION_SUBJECT.to_string(),
        text,
        html,
    }
}
