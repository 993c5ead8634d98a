//! Mini App entry page
//!
//! A single self-contained HTML document over the storefront API. The
//! deployed front end ships several cosmetic skins of this page; they all
//! speak the same four endpoints, so one functional skin lives here and
//! richer ones can be dropped into `static/`.

/// Render the web entry page.
pub fn render_webapp_page() -> String {
    r##"<!DOCTYPE html>
<html lang="ru">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<meta name="theme-color" content="#000000">
<title>Dream Store</title>
<script src="https://telegram.org/js/telegram-web-app.js"></script>
<style>
*{box-sizing:border-box;margin:0;padding:0}
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',sans-serif;background:linear-gradient(180deg,#000,#1a1a1a);color:#fff;min-height:100vh;padding:20px}
h1{font-size:1.3rem;margin-bottom:16px}
.stat{display:inline-block;background:rgba(255,165,0,.15);border:1px solid rgba(255,165,0,.4);border-radius:12px;padding:8px 14px;margin:0 8px 16px 0}
.shop{display:grid;grid-template-columns:repeat(2,1fr);gap:10px;margin-bottom:20px}
.item{background:rgba(255,255,255,.06);border:1px solid rgba(255,165,0,.2);border-radius:12px;padding:12px;text-align:center}
.item button,.topup button{background:#FFA500;color:#000;border:none;border-radius:8px;padding:8px 14px;font-weight:600;cursor:pointer}
.topup{margin-bottom:20px}
</style>
</head>
<body>
<h1>Dream Store</h1>
<div class="stat">💎 <span id="diamonds">0</span></div>
<div class="stat">⚡ <span id="energy">100</span></div>
<div class="topup"><button onclick="buyDiamonds(100)">Купить 100 💎</button></div>
<div class="shop" id="shop"></div>
<script>
const tg = window.Telegram.WebApp;
tg.ready();
const userId = tg.initDataUnsafe?.user?.id || 0;
const items = [
    ['pajamas', 'Пижама', 50],
    ['lingerie', 'Бельё', 75],
    ['cat_ears', 'Кошачьи ушки', 30],
    ['vip_pass', 'VIP-пропуск', 40],
    ['wine_bottle', 'Бутылка вина', 12],
    ['control_charm', 'Оберег', 20],
    ['flower_bouquet', 'Букет цветов', 15],
];

function refresh() {
    fetch(`/get_user_data?user_id=${userId}`)
        .then(r => r.json())
        .then(data => {
            document.getElementById('diamonds').innerText = data.diamonds;
            document.getElementById('energy').innerText = data.energy;
        });
}

function buyItem(item) {
    fetch('/buy_item', {
        method: 'POST',
        headers: {'Content-Type': 'application/json'},
        body: JSON.stringify({user_id: userId, item: item})
    })
        .then(r => r.json())
        .then(data => {
            if (data.success) {
                document.getElementById('diamonds').innerText = data.diamonds;
            } else {
                alert('Недостаточно кристаллов.');
            }
        });
}

function buyDiamonds(amount) {
    fetch('/buy_diamonds', {
        method: 'POST',
        headers: {'Content-Type': 'application/json'},
        body: JSON.stringify({user_id: userId, amount: amount})
    })
        .then(r => r.json())
        .then(data => {
            if (data.success) {
                document.getElementById('diamonds').innerText = data.diamonds;
            }
        });
}

const shop = document.getElementById('shop');
for (const [id, name, price] of items) {
    const card = document.createElement('div');
    card.className = 'item';
    card.innerHTML = `<p>${name}</p><p>💎 ${price}</p>`;
    const btn = document.createElement('button');
    btn.innerText = 'Купить';
    btn.onclick = () => buyItem(id);
    card.appendChild(btn);
    shop.appendChild(card);
}
refresh();
</script>
</body>
</html>"##
    .to_string()
}
