use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ka" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (maud::PreEscaped(STYLES)) }
            }
            body {
                header {
                    a href="/" class="brand" { "REDBERRY" }
                    nav {
                        a href="/new-listing" class="btn btn-primary" { "+ ლისტინგის დამატება" }
                        a href="/new-agent" class="btn btn-outline" { "+ აგენტის დამატება" }
                    }
                }
                main {
                    (content)
                }
            }
        }
    }
}

const STYLES: &str = r#"
body { font-family: 'FiraGO', system-ui, sans-serif; margin: 0; color: #021526; }
header { display: flex; justify-content: space-between; align-items: center;
         padding: 1rem 4rem; border-bottom: 1px solid #dbdbdb; }
.brand { font-weight: 700; color: #f93b1d; text-decoration: none; letter-spacing: 0.05em; }
main { max-width: 1100px; margin: 0 auto; padding: 1.5rem 1rem; }
nav { display: flex; gap: 1rem; }
.btn { display: inline-block; padding: 0.7rem 1.2rem; border-radius: 10px;
       text-decoration: none; font-size: 1rem; border: none; cursor: pointer; }
.btn-primary { background: #f93b1d; color: #fff; }
.btn-outline { background: #fff; color: #f93b1d; border: 1px solid #f93b1d; }
.filter-bar { display: flex; flex-wrap: wrap; gap: 1rem; align-items: flex-end;
              border: 1px solid #dbdbdb; border-radius: 10px; padding: 1rem; }
.filter-bar fieldset { border: none; padding: 0; margin: 0; }
.filter-bar legend, .filter-bar label { font-size: 0.85rem; font-weight: 600; }
.filter-bar input[type=number], .filter-bar input[type=text] { width: 7rem; padding: 0.4rem; }
.chips { display: flex; flex-wrap: wrap; gap: 0.5rem; margin: 1rem 0; }
.chip { border: 1px solid #dbdbdb; border-radius: 999px; padding: 0.2rem 0.8rem;
        font-size: 0.85rem; }
.chip a { text-decoration: none; color: #021526; margin-left: 0.3rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
        gap: 1.5rem; margin-top: 1.5rem; }
.card { border: 1px solid #dbdbdb; border-radius: 14px; overflow: hidden;
        text-decoration: none; color: inherit; display: block; }
.card img { width: 100%; height: 180px; object-fit: cover; display: block; }
.card-body { padding: 1rem; }
.card .price { font-size: 1.3rem; font-weight: 700; margin: 0; }
.card .tag, .detail .tag { background: rgba(2,21,38,0.5); color: #fff; font-size: 0.8rem;
       border-radius: 999px; padding: 0.15rem 0.7rem; }
.card .meta { color: rgba(2,21,38,0.7); font-size: 0.9rem; }
form.stack { display: grid; grid-template-columns: 1fr 1fr; gap: 1.2rem; max-width: 790px; }
form.stack .wide { grid-column: 1 / -1; }
form.stack label { display: block; font-weight: 600; font-size: 0.9rem; margin-bottom: 0.2rem; }
form.stack input, form.stack select, form.stack textarea {
    width: 100%; padding: 0.6rem; border: 1px solid #808a93; border-radius: 6px;
    box-sizing: border-box; }
form.stack .valid input, form.stack .valid select, form.stack .valid textarea { border-color: #45a849; }
form.stack .invalid input, form.stack .invalid select, form.stack .invalid textarea { border-color: #f93b1d; }
.hint { font-size: 0.8rem; margin: 0.25rem 0 0; }
.valid .hint { color: #45a849; }
.invalid .hint { color: #f93b1d; }
.form-error { color: #f93b1d; font-weight: 600; }
.actions { grid-column: 1 / -1; display: flex; justify-content: flex-end; gap: 1rem; }
.detail { display: grid; grid-template-columns: 3fr 2fr; gap: 3rem; margin-top: 1.5rem; }
.detail img { width: 100%; border-radius: 14px; }
.detail .price { font-size: 2.5rem; font-weight: 700; margin: 0.5rem 0; }
.detail p { color: rgba(2,21,38,0.7); }
.agent-card { border: 1px solid #dbdbdb; border-radius: 10px; padding: 1.2rem; margin-top: 2rem; }
.agent-card img { width: 72px; height: 72px; border-radius: 50%; object-fit: cover; }
.muted { color: #808a93; font-size: 0.9rem; }
.delete-btn { background: none; border: 1px solid #808a93; color: #808a93;
              border-radius: 8px; padding: 0.5rem 1rem; cursor: pointer; margin-top: 1.5rem; }
.related { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
           gap: 1.5rem; margin-top: 1rem; }
"#;
