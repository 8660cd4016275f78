use crate::domain::validation::{AgentForm, AgentStatuses};
use crate::templates::components::{field_wrap, status_class};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct AgentFormVm<'a> {
    pub form: &'a AgentForm,
    pub statuses: AgentStatuses,
    pub error: Option<String>,
}

pub fn agent_form_page(vm: &AgentFormVm) -> Markup {
    let form = vm.form;
    let s = &vm.statuses;

    desktop_layout(
        "აგენტის დამატება",
        html! {
            h1 { "აგენტის დამატება" }

            @if let Some(error) = &vm.error {
                p class="form-error" { (error) }
            }

            form class="stack" method="post" action="/new-agent" enctype="multipart/form-data" {
                (field_wrap("სახელი", s.name, html! {
                    input type="text" name="name" value=(form.name);
                }, "მინიმუმ 2 სიმბოლო"))

                (field_wrap("გვარი", s.surname, html! {
                    input type="text" name="surname" value=(form.surname);
                }, "მინიმუმ 2 სიმბოლო"))

                (field_wrap("ელ-ფოსტა", s.email, html! {
                    input type="email" name="email" value=(form.email);
                }, "გამოიყენეთ @redberry.ge ფოსტა"))

                (field_wrap("ტელეფონის ნომერი", s.phone, html! {
                    input type="text" name="phone" maxlength="9" value=(form.phone);
                }, "ფორმატი: 5XXXXXXXX"))

                div class=(format!("wide {}", status_class(s.avatar))) {
                    label { "ატვირთეთ ფოტო *" }
                    input type="file" name="avatar" accept="image/*";
                    p class="hint" { "✔ მაქსიმუმ 1MB" }
                }

                div class="actions" {
                    a href="/" class="btn btn-outline" { "გაუქმება" }
                    button type="submit" class="btn btn-primary" { "დაამატე აგენტი" }
                }
            }
        },
    )
}
