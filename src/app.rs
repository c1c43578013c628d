use leptos::*;

/// 🦀 Budget page shell.
///
/// Static markup only: the class names match the default
/// [`Selectors`](crate::config::Selectors) and all dynamic content is written by
/// [`DomBudgetView`](crate::infrastructure::ui::DomBudgetView).
#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>
            {r#"
            body {
                font-family: 'Open Sans', -apple-system, BlinkMacSystemFont, sans-serif;
                color: #555;
                margin: 0;
            }

            .clearfix::after {
                content: "";
                display: table;
                clear: both;
            }

            .top {
                height: 40vh;
                background: linear-gradient(135deg, #1e3c72 0%, #2a5298 100%);
                position: relative;
            }

            .budget {
                position: absolute;
                width: 350px;
                top: 50%;
                left: 50%;
                transform: translate(-50%, -50%);
                color: #fff;
            }

            .budget__title {
                font-size: 18px;
                text-align: center;
                margin-bottom: 10px;
                font-weight: 300;
            }

            .budget__value {
                font-weight: 300;
                font-size: 46px;
                text-align: center;
                margin-bottom: 25px;
                letter-spacing: 2px;
            }

            .budget__income,
            .budget__expenses {
                padding: 12px;
                text-transform: uppercase;
                margin-bottom: 10px;
            }

            .budget__income { background-color: #28b9b5; }
            .budget__expenses { background-color: #ff5049; }

            .budget__income--text,
            .budget__expenses--text {
                float: left;
                font-size: 13px;
                margin-top: 2px;
            }

            .budget__income--value,
            .budget__expenses--value {
                letter-spacing: 1px;
                float: left;
            }

            .budget__income .right,
            .budget__expenses .right { float: right; }

            .budget__expenses--percentage {
                float: left;
                width: 34px;
                font-size: 11px;
                padding: 3px 0;
                margin-left: 10px;
                background-color: rgba(255, 255, 255, 0.2);
                text-align: center;
                border-radius: 3px;
            }

            .add {
                padding: 14px;
                border-bottom: 1px solid #e7e7e7;
                background-color: #f7f7f7;
            }

            .add__container {
                margin: 0 auto;
                text-align: center;
            }

            .add__type,
            .add__description,
            .add__value {
                border: 1px solid #e7e7e7;
                height: 44px;
                font-size: 14px;
                padding: 12px 15px;
                margin-right: 10px;
                border-radius: 5px;
                transition: border 0.3s;
            }

            .add__type { width: 55px; }
            .add__description { width: 400px; }
            .add__value { width: 100px; }

            .add__btn {
                font-size: 35px;
                background: none;
                border: none;
                color: #28b9b5;
                cursor: pointer;
                line-height: 1.1;
            }

            .add__btn:active { transform: translateY(2px); }

            .add__type:focus,
            .add__description:focus,
            .add__value:focus {
                outline: none;
                border: 1px solid #28b9b5;
            }

            .red { color: #ff5049 !important; }
            .red-focus:focus { border: 1px solid #ff5049 !important; }

            .container {
                width: 1000px;
                margin: 60px auto;
            }

            .income { float: left; width: 475px; margin-right: 50px; }
            .expenses { float: left; width: 475px; }

            h2 {
                text-transform: uppercase;
                font-size: 18px;
                font-weight: 400;
                margin-bottom: 15px;
            }

            .income__title { color: #28b9b5; }
            .expenses__title { color: #ff5049; }

            .item {
                padding: 13px;
                border-bottom: 1px solid #e7e7e7;
            }

            .item:first-child { border-top: 1px solid #e7e7e7; }
            .item:nth-child(even) { background-color: #f7f7f7; }

            .item__description { float: left; }

            .item__value {
                float: left;
                transition: transform 0.3s;
            }

            .item__percentage {
                float: left;
                margin-left: 20px;
                font-size: 11px;
                background-color: #ffdad9;
                padding: 3px;
                border-radius: 3px;
                width: 32px;
                text-align: center;
            }

            .income .item__value,
            .income .item__delete--btn { color: #28b9b5; }

            .expenses .item__value,
            .expenses .item__percentage,
            .expenses .item__delete--btn { color: #ff5049; }

            .item .right { float: right; }

            .item__delete { float: left; }

            .item__delete--btn {
                font-size: 22px;
                background: none;
                border: none;
                cursor: pointer;
                display: none;
            }

            .item__delete--btn i::before { content: "✕"; font-style: normal; }

            .item:hover .item__delete--btn { display: block; }
            .item:hover .item__value { transform: translateX(-20px); }
            .item:hover .item__percentage { transform: translateX(-20px); }
            "#}
        </style>
        <div class="top">
            <BudgetSummary />
        </div>
        <div class="bottom">
            <AddEntryForm />
            <EntryLists />
        </div>
    }
}

/// 📊 Month label, net budget and per-type totals
#[component]
fn BudgetSummary() -> impl IntoView {
    view! {
        <div class="budget">
            <div class="budget__title">
                "Available Budget in " <span class="budget__title--month">"%Month%"</span> ":"
            </div>
            <div class="budget__value">"0.00"</div>

            <div class="budget__income clearfix">
                <div class="budget__income--text">"Income"</div>
                <div class="right">
                    <div class="budget__income--value">"0.00"</div>
                    <div class="budget__income--percentage">"\u{00a0}"</div>
                </div>
            </div>

            <div class="budget__expenses clearfix">
                <div class="budget__expenses--text">"Expenses"</div>
                <div class="right clearfix">
                    <div class="budget__expenses--value">"0.00"</div>
                    <div class="budget__expenses--percentage">"---"</div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn AddEntryForm() -> impl IntoView {
    view! {
        <div class="add">
            <div class="add__container">
                <select class="add__type">
                    <option value="income">"+"</option>
                    <option value="expenses">"-"</option>
                </select>
                <input type="text" class="add__description" placeholder="Add description"/>
                <input type="number" class="add__value" placeholder="Value" step="any"/>
                <button class="add__btn">"✓"</button>
            </div>
        </div>
    }
}

#[component]
fn EntryLists() -> impl IntoView {
    view! {
        <div class="container clearfix">
            <div class="income">
                <h2 class="income__title">"Income"</h2>
                <div class="income__list"></div>
            </div>
            <div class="expenses">
                <h2 class="expenses__title">"Expenses"</h2>
                <div class="expenses__list"></div>
            </div>
        </div>
    }
}
