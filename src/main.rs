use kanto_weather_panel::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
