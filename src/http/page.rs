//! Embedded control page served at `/`.
//!
//! Only sends commands on change.  Gear and throttle are combined on the
//! client into a signed drive speed; the gear and gas positions are also
//! reported so the state query reflects the selector.

pub const CONTROL_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>RC Car</title>
<style>
body { font-family: sans-serif; margin: 1em; text-align: center; }
button { font-size: 1.1em; margin: 0.3em; padding: 0.5em 1em; }
input[type=range] { width: 90%; }
.on { background: #fc3; }
#stop { background: #c22; color: #fff; }
</style>
</head>
<body>
<h2>RC Car</h2>
<p>Steering <span id="angleLabel">0</span>&deg;</p>
<input id="steer" type="range" min="-72" max="108" value="0">
<p>Gear:
  <button id="gearD">D</button>
  <button id="gearN" class="on">N</button>
  <button id="gearR">R</button>
</p>
<p>Gas <span id="gasLabel">0</span>%</p>
<input id="gas" type="range" min="0" max="100" value="0">
<p>
  <button id="brake">Brake</button>
  <button id="headlight">Headlight</button>
  <button id="stoplight">Stop light</button>
</p>
<p><button id="stop">STOP</button></p>
<p><small id="version"></small></p>
<script>
const CENTER = 72;
let gear = 'N';
let gas = 0;

async function get(url) {
  const r = await fetch(url);
  return r.text();
}

function speed() {
  const s = Math.round(gas * 255 / 100);
  return gear === 'D' ? s : gear === 'R' ? -s : 0;
}

async function pushDrive() {
  await get('/api/gas?value=' + gas);
  await get('/api/mosfet?duty=' + speed());
}

function selectGear(g) {
  gear = g;
  for (const k of ['D', 'N', 'R']) {
    document.getElementById('gear' + k).classList.toggle('on', k === g);
  }
  get('/api/gear?value=' + g).then(pushDrive);
}

document.getElementById('steer').addEventListener('input', (e) => {
  const logical = parseInt(e.target.value, 10);
  document.getElementById('angleLabel').textContent = logical;
  get('/api/servo?angle=' + (logical + CENTER));
});

document.getElementById('gas').addEventListener('input', (e) => {
  gas = parseInt(e.target.value, 10);
  document.getElementById('gasLabel').textContent = gas;
  pushDrive();
});

for (const g of ['D', 'N', 'R']) {
  document.getElementById('gear' + g).addEventListener('click', () => selectGear(g));
}

const brake = document.getElementById('brake');
const press = () => get('/api/brake?state=1').then(() => brake.classList.add('on'));
// Release leaves the motor stopped; re-send the throttle so the car resumes.
const release = () => get('/api/brake?state=0').then(() => {
  brake.classList.remove('on');
  return pushDrive();
});
brake.addEventListener('pointerdown', press);
brake.addEventListener('pointerup', release);
brake.addEventListener('pointerleave', () => { if (brake.classList.contains('on')) release(); });

for (const id of ['headlight', 'stoplight']) {
  const b = document.getElementById(id);
  b.addEventListener('click', async () => {
    b.classList.toggle('on', (await get('/api/' + id)) === 'ON');
  });
}

document.getElementById('stop').addEventListener('click', async () => {
  await get('/api/stop');
  gear = 'N';
  gas = 0;
  document.getElementById('gas').value = 0;
  document.getElementById('gasLabel').textContent = 0;
  document.getElementById('steer').value = 0;
  document.getElementById('angleLabel').textContent = 0;
  for (const k of ['D', 'N', 'R']) {
    document.getElementById('gear' + k).classList.toggle('on', k === 'N');
  }
});

get('/api/version').then((v) => { document.getElementById('version').textContent = v; });
</script>
</body>
</html>
"#;
