use super::OutputRecord;

fn json_for_script_tag(value: &str) -> String {
    value.replace("</", "<\\/")
}

/// Renders the directory as a self-contained HTML page: a searchable card
/// gallery with a prev/next detail modal, driven by the embedded records.
pub fn render_html(records: &[OutputRecord]) -> Vec<u8> {
    let json = serde_json::to_string(records).unwrap_or_else(|_| "[]".to_string());
    let json = json_for_script_tag(&json);

    let html = format!(
        r####"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8"/>
  <meta content="width=device-width, initial-scale=1.0" name="viewport"/>
  <title>Employee Directory</title>
  <script src="https://cdn.tailwindcss.com"></script>
  <style>
    body {{ font-family: ui-sans-serif, system-ui, sans-serif; }}
  </style>
</head>
<body class="bg-slate-50 text-slate-900 min-h-screen">
  <script type="application/json" id="directory-data">{json}</script>

  <header class="border-b border-slate-200 bg-white px-8 py-4 sticky top-0 z-40">
    <div class="max-w-5xl mx-auto flex items-center justify-between gap-6">
      <h1 class="text-xl font-extrabold tracking-tight uppercase">Employee Directory</h1>
      <div class="flex items-center gap-3">
        <input id="search" class="w-64 rounded-lg border border-slate-300 px-4 py-2 text-sm" placeholder="Search by name..." type="search"/>
        <span id="count" class="text-xs font-bold text-slate-500"></span>
      </div>
    </div>
  </header>

  <main class="max-w-5xl mx-auto px-8 py-10">
    <div id="gallery" class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-5"></div>
    <p id="empty" class="hidden text-slate-500 text-sm font-medium">No matches.</p>
  </main>

  <div id="modal-backdrop" class="hidden fixed inset-0 bg-slate-900/60 z-50 flex items-center justify-center p-6">
    <div class="bg-white rounded-2xl shadow-xl max-w-sm w-full overflow-hidden">
      <div class="flex justify-end p-3">
        <button id="modal-close" class="text-slate-400 hover:text-slate-700 font-bold px-2" type="button">X</button>
      </div>
      <div id="modal-body" class="px-8 pb-6 text-center"></div>
      <div class="flex border-t border-slate-200">
        <button id="modal-prev" class="flex-1 py-3 text-sm font-bold text-slate-600 hover:bg-slate-50" type="button">Prev</button>
        <button id="modal-next" class="flex-1 py-3 text-sm font-bold text-slate-600 hover:bg-slate-50 border-l border-slate-200" type="button">Next</button>
      </div>
    </div>
  </div>

  <script>
    (function() {{
      function escapeHtml(value) {{
        return String(value == null ? '' : value)
          .replaceAll('&', '&amp;')
          .replaceAll('<', '&lt;')
          .replaceAll('>', '&gt;')
          .replaceAll('"', '&quot;')
          .replaceAll("'", '&#39;');
      }}

      var records = JSON.parse(document.getElementById('directory-data').textContent || '[]');
      var active = records.slice();
      var current = 0;

      var gallery = document.getElementById('gallery');
      var emptyEl = document.getElementById('empty');
      var countEl = document.getElementById('count');
      var searchEl = document.getElementById('search');
      var backdrop = document.getElementById('modal-backdrop');
      var modalBody = document.getElementById('modal-body');

      function cardHtml(r, i) {{
        return '<div class="card bg-white rounded-2xl border border-slate-200 p-5 flex items-center gap-4 cursor-pointer hover:border-slate-400 transition-colors" data-index="' + i + '">'
          + '<img class="size-16 rounded-full object-cover" src="' + escapeHtml(r.photo) + '" alt="profile picture"/>'
          + '<div class="min-w-0">'
          + '<div class="font-bold truncate">' + escapeHtml(r.name) + '</div>'
          + '<div class="text-xs text-slate-500 truncate">' + escapeHtml(r.email) + '</div>'
          + '<div class="text-xs text-slate-500 truncate">' + escapeHtml(r.city) + ', ' + escapeHtml(r.locality) + '</div>'
          + '</div></div>';
      }}

      function modalHtml(r) {{
        return '<img class="size-24 rounded-full object-cover mx-auto mb-3" src="' + escapeHtml(r.photo) + '" alt="profile picture"/>'
          + '<h3 class="text-lg font-extrabold">' + escapeHtml(r.name) + '</h3>'
          + '<p class="text-sm text-slate-500">' + escapeHtml(r.email) + '</p>'
          + '<p class="text-sm text-slate-500">' + escapeHtml(r.city) + '</p>'
          + '<hr class="my-3"/>'
          + '<p class="text-sm text-slate-600">' + escapeHtml(r.cell) + '</p>'
          + '<p class="text-sm text-slate-600">' + escapeHtml(r.street) + ', ' + escapeHtml(r.city) + ', ' + escapeHtml(r.locality) + ' ' + escapeHtml(r.postcode) + '</p>'
          + '<p class="text-sm text-slate-600">Birthday: ' + escapeHtml(r.birthday) + '</p>';
      }}

      function renderCards() {{
        gallery.innerHTML = active.map(cardHtml).join('');
        emptyEl.classList.toggle('hidden', active.length > 0);
        countEl.textContent = active.length + ' / ' + records.length;
        for (var el of gallery.querySelectorAll('.card')) {{
          el.addEventListener('click', function(e) {{
            openModal(Number(e.currentTarget.getAttribute('data-index') || 0));
          }});
        }}
      }}

      function renderModal() {{
        modalBody.innerHTML = modalHtml(active[current]);
      }}

      function openModal(index) {{
        if (!active.length) return;
        current = Math.min(index, active.length - 1);
        renderModal();
        backdrop.classList.remove('hidden');
      }}

      function closeModal() {{
        backdrop.classList.add('hidden');
      }}

      document.getElementById('modal-close').addEventListener('click', closeModal);
      backdrop.addEventListener('click', function(e) {{
        if (e.target === backdrop) closeModal();
      }});
      document.getElementById('modal-prev').addEventListener('click', function() {{
        if (current > 0) {{
          current -= 1;
          renderModal();
        }}
      }});
      document.getElementById('modal-next').addEventListener('click', function() {{
        if (current < active.length - 1) {{
          current += 1;
          renderModal();
        }}
      }});

      searchEl.addEventListener('input', function() {{
        var q = (searchEl.value || '').trim().toLowerCase();
        active = q
          ? records.filter(function(r) {{ return String(r.name).toLowerCase().indexOf(q) !== -1; }})
          : records.slice();
        renderCards();
      }});

      renderCards();
    }})();
  </script>
</body>
</html>"####,
    );

    html.into_bytes()
}
