//! Server-side rendering of the CV page.
//!
//! The accordion works without JavaScript: every toggle and nav link points at
//! `/?open=<id>` for the successor state. The inline script only layers
//! scroll-spy, the progress bar and (when enabled) the chat widget on top.

use crate::site::content::{
    CERTIFICATIONS, CV_DOWNLOAD, EDUCATION, EXPERIENCE, PROFILE, SKILLS,
};
use crate::site::sections::{AccordionState, SectionId};

/// Height of the fixed navbar, in CSS pixels. The scroll-spy marks a section
/// active once its top passes this line; `scroll-margin-top` matches it.
pub const HEADER_OFFSET: u32 = 112;

#[derive(Debug, Clone, Copy, Default)]
pub struct PageOptions {
    pub accordion: AccordionState,
    pub chat_widget: bool,
}

impl PageOptions {
    /// Nav link highlighted on first paint: the open section, else the first one.
    /// Once the visitor scrolls, the script takes over.
    pub fn active_section(&self) -> SectionId {
        self.accordion.open().unwrap_or(SectionId::Profile)
    }
}

/// Escape HTML special characters.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders the brand name with its green "o".
fn brand(text: &str) -> String {
    escape_html(text).replace(
        "ServiceNow",
        r#"ServiceN<span class="brand-o">o</span>w"#,
    )
}

pub fn render_page(options: &PageOptions) -> String {
    let mut html = String::with_capacity(16 * 1024);

    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{name}</title>
<style>{STYLE}</style>
</head>
<body>
<div id="progress" class="progress" style="width:0%"></div>
"#,
        name = escape_html(PROFILE.name),
    ));

    html.push_str(&render_nav(options.active_section()));

    html.push_str("<main>\n");
    html.push_str(&render_header());
    for id in SectionId::ALL {
        html.push_str(&render_section(id, &options.accordion));
    }
    html.push_str("</main>\n");

    if options.chat_widget {
        html.push_str(CHAT_WIDGET);
    }

    html.push_str(&format!(
        "<script>const HEADER_OFFSET = {HEADER_OFFSET};\n{SCRIPT}</script>\n</body>\n</html>\n"
    ));
    html
}

fn render_nav(active: SectionId) -> String {
    let mut html = format!(
        r#"<nav class="navbar">
<div class="nav-inner">
<div class="brand">{name}</div>
<input type="checkbox" id="menu-toggle" class="menu-toggle" aria-label="Toggle menu">
<label for="menu-toggle" class="menu-button">&#9776;</label>
<div class="nav-links">
"#,
        name = escape_html(PROFILE.name)
    );
    for id in SectionId::ALL {
        let current = if id == active {
            r#" class="active" aria-current="true""#
        } else {
            ""
        };
        html.push_str(&format!(
            "<a href=\"/?open={id}#{id}\" data-section=\"{id}\"{current}>{label}</a>\n",
            id = id.id(),
            label = escape_html(id.label()),
        ));
    }
    html.push_str(&format!(
        r#"<a href="{file}" download="{save_as}" class="cv-download" title="Download CV as PDF">PDF-CV</a>
</div>
</div>
</nav>
"#,
        file = escape_html(CV_DOWNLOAD.file),
        save_as = escape_html(CV_DOWNLOAD.save_as),
    ));
    html
}

fn render_header() -> String {
    format!(
        r#"<div class="card header">
<img src="{picture}" alt="Profile" class="avatar">
<div>
<h1>{name}</h1>
<p class="headline">{headline}</p>
<a href="{linkedin}" target="_blank" rel="noopener noreferrer" class="pill" title="Visit LinkedIn Profile">LinkedIn</a>
<a href="mailto:{email}" class="email">{email}</a>
</div>
</div>
"#,
        picture = escape_html(PROFILE.picture),
        name = escape_html(PROFILE.name),
        headline = brand(PROFILE.headline),
        linkedin = escape_html(PROFILE.linkedin),
        email = escape_html(PROFILE.email),
    )
}

fn render_section(id: SectionId, accordion: &AccordionState) -> String {
    let open = accordion.is_open(id);
    let next = accordion.toggled(id);
    let mut html = format!(
        r##"<section id="{id}" class="section">
<div class="card">
<a class="section-toggle" role="button" href="/?open={next}#{id}" aria-expanded="{open}" aria-controls="{id}-panel">
<h3>{title}</h3><span class="chevron{rotated}">&#9662;</span>
</a>
"##,
        id = id.id(),
        next = next.query_value(),
        title = escape_html(id.title()),
        rotated = if open { " open" } else { "" },
    );

    if open {
        html.push_str(&format!(r#"<div id="{}-panel" class="panel">"#, id.id()));
        html.push('\n');
        html.push_str(&render_section_body(id));
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n</section>\n");
    html
}

fn render_section_body(id: SectionId) -> String {
    let mut html = String::new();
    match id {
        SectionId::Profile => {
            let employer = "Performance Technologies S.A.";
            let employer_link = format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">{employer}</a>"#,
                escape_html(PROFILE.employer_url)
            );
            for paragraph in PROFILE.summary {
                let text = brand(paragraph).replacen(employer, &employer_link, 1);
                html.push_str(&format!("<p>{text}</p>\n"));
            }
        }
        SectionId::Certifications => {
            html.push_str("<ul>\n");
            for cert in CERTIFICATIONS {
                html.push_str(&format!(
                    "<li><span>{brand} Certified {name}</span> <a href=\"{file}\" download=\"{download}\" class=\"cert\"><strong>({abbr})</strong></a></li>\n",
                    brand = brand("ServiceNow"),
                    name = escape_html(cert.name),
                    file = escape_html(cert.file),
                    download = escape_html(cert.download_name()),
                    abbr = escape_html(cert.abbr),
                ));
            }
            html.push_str("</ul>\n");
        }
        SectionId::Education => {
            for edu in EDUCATION {
                html.push_str(&format!(
                    "<p class=\"strong\">{degree}</p><p class=\"muted\">{institution} | {period} | {grade}</p>\n",
                    degree = escape_html(edu.degree),
                    institution = escape_html(edu.institution),
                    period = escape_html(edu.period),
                    grade = escape_html(edu.grade),
                ));
            }
        }
        SectionId::Experience => {
            for job in EXPERIENCE {
                html.push_str(&format!(
                    "<div class=\"job\"><p class=\"strong\">{employer} | {location}</p><p class=\"muted\">{role} | {period}</p></div>\n",
                    employer = escape_html(job.employer),
                    location = escape_html(job.location),
                    role = brand(job.role),
                    period = escape_html(job.period),
                ));
            }
        }
        SectionId::Skills => {
            for group in SKILLS {
                html.push_str(&format!(
                    "<div class=\"skill\"><strong>{label}:</strong> {items}</div>\n",
                    label = brand(group.label),
                    items = escape_html(&group.items.join(", ")),
                ));
            }
        }
        SectionId::Contact => {
            html.push_str(&format!(
                "<div><strong>Email:</strong> <a href=\"mailto:{email}\">{email}</a></div>\n",
                email = escape_html(PROFILE.email),
            ));
        }
    }
    html
}

const STYLE: &str = "\
body{margin:0;font-family:system-ui,sans-serif;background:#f9fafb;color:#1f2937}\
.progress{position:fixed;top:0;left:0;height:3px;background:#2563eb;z-index:60}\
.navbar{position:fixed;top:0;left:0;right:0;background:#fff;border-bottom:1px solid #e5e7eb;z-index:50}\
.nav-inner{max-width:56rem;margin:0 auto;display:flex;align-items:center;justify-content:space-between;padding:.75rem 1rem;flex-wrap:wrap}\
.nav-links{display:flex;gap:.75rem;align-items:center}\
.nav-links a{font-size:.875rem;color:inherit;text-decoration:none;padding:.25rem .5rem;border-radius:.25rem}\
.nav-links a.active{background:#dbeafe;color:#1d4ed8}\
.menu-toggle,.menu-button{display:none}\
@media(max-width:640px){.menu-button{display:block;cursor:pointer}.nav-links{display:none;width:100%;flex-direction:column}\
.menu-toggle:checked~.nav-links{display:flex}}\
main{max-width:56rem;margin:0 auto;padding:7rem 1rem 4rem}\
.card{background:#fff;border:1px solid #e5e7eb;border-radius:1rem;margin-bottom:1.5rem}\
.header{display:flex;gap:1.5rem;padding:1.5rem;align-items:center}\
.avatar{width:7rem;height:7rem;border-radius:50%;object-fit:cover}\
.headline{color:#2563eb}.brand-o{color:#22c55e;font-weight:600}\
.section{scroll-margin-top:112px}\
.section-toggle{display:flex;justify-content:space-between;align-items:center;padding:1rem 1.25rem;color:inherit;text-decoration:none;background:#f9fafb;border-radius:1rem}\
.chevron{transition:transform .25s}.chevron.open{transform:rotate(180deg)}\
.panel{padding:.25rem 1.25rem 1.25rem}.strong{font-weight:600}.muted{font-size:.875rem;color:#4b5563}\
#chat{position:fixed;bottom:1.25rem;right:1.25rem;width:20rem;z-index:50}\
#chat-log{height:18rem;overflow-y:auto;background:#fff;border:1px solid #d1d5db;border-radius:.5rem;padding:.5rem}\
.msg-user{text-align:right}.msg-ai{text-align:left}";

const SCRIPT: &str = r#"(function () {
  const sections = Array.from(document.querySelectorAll("section.section"));
  const links = Array.from(document.querySelectorAll("[data-section]"));
  const bar = document.getElementById("progress");
  function onScroll() {
    const line = window.scrollY + HEADER_OFFSET;
    let active = sections.length ? sections[0].id : null;
    for (const s of sections) { if (s.offsetTop <= line) active = s.id; }
    for (const a of links) {
      const on = a.dataset.section === active;
      a.classList.toggle("active", on);
      if (on) a.setAttribute("aria-current", "true"); else a.removeAttribute("aria-current");
    }
    const scrollable = document.documentElement.scrollHeight - window.innerHeight;
    const pct = scrollable > 0 ? Math.min(100, Math.max(0, window.scrollY / scrollable * 100)) : 0;
    if (bar) bar.style.width = pct + "%";
  }
  window.addEventListener("scroll", onScroll, { passive: true });
  onScroll();
})();"#;

const CHAT_WIDGET: &str = r#"<div id="chat">
<button id="chat-open" type="button">Ask me more about Panos</button>
<div id="chat-panel" hidden>
<div id="chat-log" aria-live="polite"></div>
<form id="chat-form"><input id="chat-input" placeholder="Ask me a question..." autocomplete="off"><button type="submit">Send</button></form>
</div>
</div>
<script>(function () {
  const panel = document.getElementById("chat-panel");
  const openBtn = document.getElementById("chat-open");
  const log = document.getElementById("chat-log");
  const input = document.getElementById("chat-input");
  const knowledge = fetch("/knowledge").then(r => r.text()).catch(() => "");
  openBtn.addEventListener("click", () => {
    panel.hidden = !panel.hidden;
    openBtn.textContent = panel.hidden ? "Ask me more about Panos" : "X";
  });
  function append(role, content) {
    const div = document.createElement("div");
    div.className = "msg-" + role;
    div.textContent = content;
    log.appendChild(div);
    div.scrollIntoView({ behavior: "smooth" });
  }
  document.getElementById("chat-form").addEventListener("submit", async (e) => {
    e.preventDefault();
    const question = input.value;
    if (!question.trim()) return;
    append("user", question);
    input.value = "";
    try {
      const res = await fetch("/api/ask", {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify({ question, knowledge: await knowledge }),
      });
      const data = await res.json();
      append("ai", data.answer);
    } catch (err) {
      append("ai", "Error: Could not get an answer.");
    }
  });
})();</script>
"#;
