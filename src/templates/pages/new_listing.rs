use crate::api::models::{Agent, City, Region};
use crate::domain::validation::{ListingForm, ListingStatuses};
use crate::templates::components::{field_wrap, status_class};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct ListingFormVm<'a> {
    pub form: &'a ListingForm,
    pub statuses: ListingStatuses,
    pub regions: &'a [Region],
    pub cities: &'a [City],
    pub agents: &'a [Agent],
    /// Message from a failed API submission; the form keeps its values.
    pub error: Option<String>,
}

pub fn listing_form_page(vm: &ListingFormVm) -> Markup {
    let form = vm.form;
    let s = &vm.statuses;

    desktop_layout(
        "ლისტინგის დამატება",
        html! {
            h1 { "ლისტინგის დამატება" }

            @if let Some(error) = &vm.error {
                p class="form-error" { (error) }
            }

            form class="stack" method="post" action="/new-listing" enctype="multipart/form-data" {
                div class="wide" {
                    label { "გარიგების ტიპი" }
                    label {
                        input type="radio" name="is_rental" value="0" checked[!form.is_rental];
                        "იყიდება"
                    }
                    label {
                        input type="radio" name="is_rental" value="1" checked[form.is_rental];
                        "ქირავდება"
                    }
                }

                (field_wrap("მისამართი", s.address, html! {
                    input type="text" name="address" value=(form.address);
                }, "მინიმუმ 2 სიმბოლო"))

                (field_wrap("საფოსტო ინდექსი", s.zip_code, html! {
                    input type="text" name="zip_code" value=(form.zip_code);
                }, "მხოლოდ რიცხვები"))

                (field_wrap("რეგიონი", s.region, html! {
                    select name="region_id" {
                        option value="" { "აირჩიეთ რეგიონი" }
                        @for region in vm.regions {
                            option value=(region.id)
                                selected[form.region_id == region.id.to_string()] {
                                (region.name)
                            }
                        }
                    }
                }, "აირჩიეთ რეგიონი"))

                (field_wrap("ქალაქი", s.city, html! {
                    select name="city_id" {
                        option value="" { "აირჩიეთ ქალაქი" }
                        @for region in vm.regions {
                            optgroup label=(region.name) {
                                @for city in vm.cities.iter().filter(|c| c.region_id == region.id) {
                                    option value=(city.id)
                                        selected[form.city_id == city.id.to_string()] {
                                        (city.name)
                                    }
                                }
                            }
                        }
                    }
                }, "აირჩიეთ ქალაქი"))

                (field_wrap("ფასი", s.price, html! {
                    input type="text" name="price" value=(form.price);
                }, "მხოლოდ რიცხვები"))

                (field_wrap("ფართობი", s.area, html! {
                    input type="text" name="area" value=(form.area);
                }, "მხოლოდ რიცხვები"))

                (field_wrap("საძინებლების რაოდენობა", s.bedrooms, html! {
                    input type="text" name="bedrooms" value=(form.bedrooms);
                }, "მთელი რიცხვი"))

                div class="wide" {
                    (field_wrap("აღწერა", s.description, html! {
                        textarea name="description" rows="4" { (form.description) }
                    }, "მინიმუმ 5 სიტყვა"))
                }

                div class=(format!("wide {}", status_class(s.image))) {
                    label { "ატვირთეთ ფოტო *" }
                    input type="file" name="image" accept="image/*";
                    p class="hint" { "✔ მაქსიმუმ 1MB" }
                }

                (field_wrap("აგენტი", s.agent, html! {
                    select name="agent_id" {
                        option value="" { "აირჩიეთ აგენტი" }
                        @for agent in vm.agents {
                            option value=(agent.id)
                                selected[form.agent_id == agent.id.to_string()] {
                                (agent.name) " " (agent.surname)
                            }
                        }
                    }
                }, "აირჩიეთ აგენტი"))

                div class="actions" {
                    a href="/" class="btn btn-outline" { "გაუქმება" }
                    button type="submit" class="btn btn-primary" { "დაამატე ლისტინგი" }
                }
            }
        },
    )
}
