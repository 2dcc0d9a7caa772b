use crate::containers::header::Header;
use crate::routes::PrivateScreen;
use i18nrs::yew::use_translation;
use yew::{Children, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub current: PrivateScreen,
}

/// Shared frame of every signed-in screen.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let (i18n, ..) = use_translation();

    html! {
    <>
        <Header current={props.current} />
        <div class="min-h-screen bg-base-100 flex flex-col">
            <main class={classes!(
                "flex-grow",
                "p-4",
                "transition-all",
                "duration-300",
                "container",
                "mx-auto"
            )}>
                {props.children.clone()}
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <div>
                    <p>{i18n.t("app.footer")}</p>
                </div>
            </footer>
        </div>
    </>
    }
}
