use yew::prelude::*;

/// Sample article content. Styling comes entirely from the CSS custom
/// properties the root projects from the applied settings.
#[function_component(Article)]
pub(crate) fn article() -> Html {
    html! {
        <article class="article">
            <h1 class="article__title">{ "Веб-типографика: как настроить чтение под себя" }</h1>
            <p class="article__paragraph">
                { "Подбор шрифта, кегля и цветовой пары — не косметика, а \
                   основа читаемости. Один и тот же текст в гротеске и в \
                   антикве читается с разной скоростью и разным настроением." }
            </p>
            <p class="article__paragraph">
                { "Откройте панель настроек слева, поменяйте параметры и \
                   нажмите «Применить» — статья перестроится под выбранные \
                   значения. Кнопка «Сбросить» возвращает оформление по \
                   умолчанию." }
            </p>
            <p class="article__paragraph">
                { "Ширина колонки влияет на длину строки: узкая колонка \
                   удобна для быстрых заметок, широкая — для лонгридов с \
                   иллюстрациями и таблицами." }
            </p>
        </article>
    }
}
