//! The HTML page served at `/`.
//!
//! The template has a single `{{default_prompt}}` placeholder; the value is
//! HTML-escaped before substitution.

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>AI Image Generator with Stable Diffusion</title>
<style>
  body { font-family: sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; }
  input[type=text] { width: 100%; padding: .5rem; box-sizing: border-box; }
  button { margin-top: .75rem; padding: .5rem 1rem; }
  img { width: 100%; margin-top: 1rem; }
  .warning { color: #8a6d00; } .error { color: #b00020; } .success { color: #1b7a1b; }
</style>
</head>
<body>
<h1>AI Image Generator with Stable Diffusion</h1>
<p>Enter a prompt and generate an AI image!</p>
<label for="prompt">Enter your image prompt:</label>
<input type="text" id="prompt" value="{{default_prompt}}">
<button id="generate">Generate Image</button>
<div id="output"></div>
<script>
const button = document.getElementById("generate");
const output = document.getElementById("output");
function show(cls, text) {
  const p = document.createElement("p");
  p.className = cls;
  p.textContent = text;
  output.appendChild(p);
}
button.addEventListener("click", async () => {
  output.innerHTML = "";
  button.disabled = true;
  show("", "Generating image... Please wait.");
  try {
    const res = await fetch("/generate", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify({ prompt: document.getElementById("prompt").value }),
    });
    output.innerHTML = "";
    const type = res.headers.get("content-type") || "";
    if (res.ok && !type.startsWith("application/json")) {
      const figure = document.createElement("figure");
      const img = document.createElement("img");
      img.src = URL.createObjectURL(await res.blob());
      const caption = document.createElement("figcaption");
      caption.textContent = "Generated Image";
      figure.append(img, caption);
      output.appendChild(figure);
      show("success", "Image generated successfully!");
    } else {
      const body = await res.json();
      show(body.level || "error", body.message);
    }
  } catch (e) {
    output.innerHTML = "";
    show("error", "Unexpected error: " + e);
  } finally {
    button.disabled = false;
  }
});
</script>
</body>
</html>
"#;

pub fn render(default_prompt: &str) -> String {
    TEMPLATE.replace("{{default_prompt}}", &escape_html(default_prompt))
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
